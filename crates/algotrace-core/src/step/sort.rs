//! Step records for the in-place comparison sorts: bubble, insertion,
//! selection and quick sort.
//!
//! Every record holds the working array as it stands after the step's action,
//! the indices the step acts on (`highlight`) and the positions already known
//! to be final (`sorted_indices`). `sorted_indices` only grows along a trace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{SortSnapshot, SortedIndices};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Bubble sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BubbleStepKind {
    /// Start of a pass, the initial state, or the early-exit notice.
    Pass,
    /// Two adjacent elements compared (with or without a subsequent swap).
    Compare,
    /// Two adjacent elements exchanged.
    Swap,
    /// An element fixed in place at the end of a pass, or the final state.
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleSortStep {
    #[serde(rename = "type")]
    pub kind: BubbleStepKind,
    pub array: Vec<i64>,
    /// One-based pass number; zero for the initial and final steps.
    pub pass: usize,
    pub current_index: usize,
    pub next_index: usize,
    pub highlight: Vec<usize>,
    pub sorted_indices: SortedIndices,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Insertion sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionStepKind {
    /// The key for this outer iteration is picked.
    Select,
    /// The key is compared with a preceding element.
    Compare,
    /// A larger element moves one slot to the right.
    Shift,
    /// The key is written into its slot.
    Insert,
    /// The prefix up to the current index is ordered.
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionSortStep {
    #[serde(rename = "type")]
    pub kind: InsertionStepKind,
    pub array: Vec<i64>,
    pub current_index: usize,
    pub key: Option<i64>,
    pub comparing_index: usize,
    pub highlight: Vec<usize>,
    pub sorted_indices: SortedIndices,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Selection sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStepKind {
    /// Start of a scan, or a new minimum found.
    Select,
    Compare,
    /// Minimum exchanged into place (a no-op when it was already there).
    Swap,
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSortStep {
    #[serde(rename = "type")]
    pub kind: SelectionStepKind,
    pub array: Vec<i64>,
    pub current_index: usize,
    pub min_index: usize,
    pub comparing_index: usize,
    pub highlight: Vec<usize>,
    pub sorted_indices: SortedIndices,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Quick sort
// ---------------------------------------------------------------------------

/// How quick sort picks the pivot of each subrange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotStrategy {
    First,
    #[default]
    Last,
    Random,
    /// Median of the values at low, mid and high.
    Median,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 4] = [
        PivotStrategy::First,
        PivotStrategy::Last,
        PivotStrategy::Random,
        PivotStrategy::Median,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PivotStrategy::First => "first",
            PivotStrategy::Last => "last",
            PivotStrategy::Random => "random",
            PivotStrategy::Median => "median",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(PivotStrategy::First),
            "last" => Ok(PivotStrategy::Last),
            "random" => Ok(PivotStrategy::Random),
            "median" | "median-of-three" => Ok(PivotStrategy::Median),
            _ => Err(CoreError::UnknownPivotStrategy { name: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickStepKind {
    /// Initial state or the start of a Lomuto partition.
    Partition,
    /// `array[scan]` compared against the pivot.
    Compare,
    /// Any exchange: pivot moved to `high`, boundary swap, or pivot placed.
    Swap,
    /// A pivot (or singleton) fixed in place, or the final state.
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSortStep {
    #[serde(rename = "type")]
    pub kind: QuickStepKind,
    pub array: Vec<i64>,
    pub low: usize,
    pub high: usize,
    /// Where the pivot currently sits.
    pub pivot_index: usize,
    /// Lomuto boundary `i`; `low - 1` before any element has been kept left.
    pub boundary: isize,
    /// Lomuto scan index `j`.
    pub scan: usize,
    pub highlight: Vec<usize>,
    pub sorted_indices: SortedIndices,
    pub description: String,
}

macro_rules! impl_sort_snapshot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SortSnapshot for $ty {
                fn array(&self) -> &[i64] {
                    &self.array
                }
                fn sorted_indices(&self) -> &SortedIndices {
                    &self.sorted_indices
                }
                fn highlight(&self) -> &[usize] {
                    &self.highlight
                }
            }
        )*
    };
}

impl_sort_snapshot!(BubbleSortStep, InsertionSortStep, SelectionSortStep, QuickSortStep);
