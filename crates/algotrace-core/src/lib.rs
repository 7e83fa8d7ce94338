pub mod catalog;
pub mod error;
pub mod graph;
pub mod id;
pub mod input;
pub mod merge_tree;
pub mod playback;
pub mod step;

// Re-export commonly used types
pub use catalog::{AlgorithmId, AlgorithmInfo, Category, Difficulty};
pub use error::CoreError;
pub use graph::{Graph, GraphEdge, GraphNode, GraphPreset};
pub use id::{MergeNodeId, NodeId};
pub use merge_tree::{MergeTree, MergeTreeNode};
pub use playback::Playback;
pub use step::{Described, PivotStrategy, SortSnapshot, SortedIndices};
