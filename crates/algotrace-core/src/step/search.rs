//! Step records for the linear and binary search tracers.

use serde::{Deserialize, Serialize};

/// Phase of a search trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStepKind {
    /// Initial state, before any probe.
    Start,
    /// One element compared against the target without a match.
    Probe,
    /// The target matched; always the last step of a successful search.
    Found,
    /// The search space is exhausted.
    NotFound,
}

/// Outcome of comparing the probed value against the target.
///
/// `Less` and `Greater` describe the probed value relative to the target:
/// `Less` means the probed value is smaller than the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    Less,
    Greater,
    Equal,
    NotEqual,
}

/// One step of a linear search over the caller's array order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearSearchStep {
    #[serde(rename = "type")]
    pub kind: SearchStepKind,
    /// Index being probed. `None` before the first probe and after exhaustion.
    pub current_index: Option<usize>,
    pub target: i64,
    pub found: bool,
    pub comparison: Option<Comparison>,
    /// Number of elements examined so far.
    pub comparisons: usize,
    pub description: String,
}

/// One step of a binary search over a sorted copy of the input.
///
/// `left`, `right` and `mid` index `sorted_array`, never the caller's array.
/// `right` may be `-1` once the search space collapses below index zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySearchStep {
    #[serde(rename = "type")]
    pub kind: SearchStepKind,
    pub sorted_array: Vec<i64>,
    pub left: isize,
    pub right: isize,
    pub mid: Option<usize>,
    pub target: i64,
    pub found: bool,
    pub comparison: Option<Comparison>,
    /// Number of bisections performed so far.
    pub comparisons: usize,
    pub description: String,
}

impl BinarySearchStep {
    /// Value under `mid`, if any.
    pub fn mid_value(&self) -> Option<i64> {
        self.mid.and_then(|m| self.sorted_array.get(m).copied())
    }
}
