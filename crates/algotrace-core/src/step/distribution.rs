//! Step records for the non-comparison sorts: counting sort and LSD radix
//! sort. Each step snapshots every auxiliary array so the phases can be drawn
//! side by side.

use serde::{Deserialize, Serialize};

/// Number of buckets used by the radix tracer.
pub const RADIX: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingStepKind {
    Count,
    Accumulate,
    Place,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingSortStep {
    #[serde(rename = "type")]
    pub kind: CountingStepKind,
    pub input_array: Vec<i64>,
    /// Indexed by `value - min_value`.
    pub count_array: Vec<usize>,
    /// `None` marks slots not yet written.
    pub output_array: Vec<Option<i64>>,
    pub current_index: Option<usize>,
    pub current_value: Option<i64>,
    pub min_value: i64,
    pub max_value: i64,
    pub highlight_input: Vec<usize>,
    pub highlight_count: Vec<usize>,
    pub highlight_output: Vec<usize>,
    pub description: String,
}

impl CountingSortStep {
    /// Output with unwritten slots dropped.
    pub fn placed(&self) -> Vec<i64> {
        self.output_array.iter().flatten().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadixStepKind {
    Distribute,
    Collect,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixSortStep {
    #[serde(rename = "type")]
    pub kind: RadixStepKind,
    /// Working array; collect steps overwrite it left to right.
    pub array: Vec<i64>,
    /// Always [`RADIX`] buckets.
    pub buckets: Vec<Vec<i64>>,
    /// Digit position, 0 = ones.
    pub current_digit: usize,
    pub current_index: Option<usize>,
    pub current_value: Option<i64>,
    pub max_digits: usize,
    pub highlight_array: Vec<usize>,
    pub highlight_bucket: Option<usize>,
    pub description: String,
}
