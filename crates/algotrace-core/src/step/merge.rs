//! Step records for the merge-sort tracer.

use serde::{Deserialize, Serialize};

use crate::id::MergeNodeId;
use crate::merge_tree::MergeTreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStepKind {
    /// An internal node was halved into two children.
    Split,
    /// The heads of the two child runs are compared.
    Compare,
    /// A merge begins, or one element moves into the merged result.
    Merge,
    /// A node's content is fully merged. The root's is the last step.
    Sorted,
}

/// Which child run an element was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeSide {
    Left,
    Right,
}

/// State of an in-progress merge of two sorted runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeProgress {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub result: Vec<i64>,
    /// Next unconsumed position in `left`.
    pub left_index: usize,
    /// Next unconsumed position in `right`.
    pub right_index: usize,
    /// Run the most recent element came from; `None` before the first move.
    pub taken_from: Option<MergeSide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSortStep {
    #[serde(rename = "type")]
    pub kind: MergeStepKind,
    /// Whole-tree snapshot; the acting node carries `is_active`.
    pub tree: MergeTreeNode,
    /// Node being split or merged, then its children.
    pub involved: Vec<MergeNodeId>,
    /// Set on `Sorted` steps.
    pub sorted_node_id: Option<MergeNodeId>,
    pub merge: Option<MergeProgress>,
    pub description: String,
}
