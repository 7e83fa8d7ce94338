//! Step records for the breadth-first and depth-first traversal tracers.
//!
//! `visited` lists nodes in the order they were marked; a node appears at
//! most once. `path` stays empty until the target is reached.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BfsStepKind {
    Start,
    Enqueue,
    Dequeue,
    /// New neighbors were enqueued.
    Explore,
    /// The dequeued node had no new neighbors.
    Visit,
    Found,
    /// The queue emptied without reaching the target.
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsStep {
    #[serde(rename = "type")]
    pub kind: BfsStepKind,
    pub current_node: Option<NodeId>,
    /// Front of the queue first.
    pub queue: Vec<NodeId>,
    pub visited: Vec<NodeId>,
    pub exploring: Vec<NodeId>,
    pub path: Vec<NodeId>,
    pub target_found: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DfsStepKind {
    Start,
    Pop,
    /// A popped node had already been visited.
    Backtrack,
    /// Unvisited neighbors listed before being pushed.
    Explore,
    Push,
    /// The popped node had no unvisited neighbors.
    Visit,
    Found,
    /// The stack emptied without reaching the target.
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsStep {
    #[serde(rename = "type")]
    pub kind: DfsStepKind,
    pub current_node: Option<NodeId>,
    /// Bottom of the stack first; the last element is popped next.
    pub stack: Vec<NodeId>,
    pub visited: Vec<NodeId>,
    pub exploring: Vec<NodeId>,
    pub path: Vec<NodeId>,
    pub target_found: bool,
    pub description: String,
}
