//! Step records: one immutable snapshot per traced algorithm action.
//!
//! Each algorithm family has its own record type and its own `kind` enum
//! (serialized as `"type"`), so a merge-sort step can never be confused with a
//! counting-sort step and every consumer can match exhaustively. Records embed
//! full copies of the arrays or frontier they describe; a renderer never needs
//! the previous step to draw the current one.
//!
//! `description` is a human-readable label. Anything a renderer needs to know
//! about which indices or nodes are involved lives in a structured field.

pub mod distribution;
pub mod merge;
pub mod search;
pub mod sort;
pub mod traversal;

use std::collections::BTreeSet;

pub use distribution::{CountingSortStep, CountingStepKind, RadixSortStep, RadixStepKind};
pub use merge::{MergeProgress, MergeSide, MergeSortStep, MergeStepKind};
pub use search::{BinarySearchStep, Comparison, LinearSearchStep, SearchStepKind};
pub use sort::{
    BubbleSortStep, BubbleStepKind, InsertionSortStep, InsertionStepKind, PivotStrategy,
    QuickSortStep, QuickStepKind, SelectionSortStep, SelectionStepKind,
};
pub use traversal::{BfsStep, BfsStepKind, DfsStep, DfsStepKind};

/// Positions of a sort trace known to hold their final value.
pub type SortedIndices = BTreeSet<usize>;

/// Common read access shared by the in-place comparison sort records.
pub trait SortSnapshot {
    /// The working array at this step.
    fn array(&self) -> &[i64];
    /// Positions fixed so far.
    fn sorted_indices(&self) -> &SortedIndices;
    /// Positions the step acts on.
    fn highlight(&self) -> &[usize];
}

/// Common read access for every step record.
pub trait Described {
    fn description(&self) -> &str;
}

macro_rules! impl_described {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Described for $ty {
                fn description(&self) -> &str {
                    &self.description
                }
            }
        )*
    };
}

impl_described!(
    LinearSearchStep,
    BinarySearchStep,
    BubbleSortStep,
    InsertionSortStep,
    SelectionSortStep,
    QuickSortStep,
    MergeSortStep,
    CountingSortStep,
    RadixSortStep,
    BfsStep,
    DfsStep,
);

/// Formats a slice as `[a, b, c]` for step descriptions.
pub fn format_values<T: std::fmt::Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
