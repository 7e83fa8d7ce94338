//! Merge-sort recursion tree: an id-addressed arena plus nested snapshots.
//!
//! The merge-sort tracer owns one [`MergeTree`] per call. Nodes are appended
//! to the arena and addressed by [`MergeNodeId`], which is simply the arena
//! position, so ids are unique and increase in creation order. The counter is
//! the arena length; nothing survives between calls.
//!
//! Renderers receive [`MergeTreeNode`] values: a nested, fully owned copy of
//! the tree as it stood at one step.

use serde::{Deserialize, Serialize};

use crate::id::MergeNodeId;

#[derive(Debug, Clone)]
struct ArenaNode {
    array: Vec<i64>,
    level: usize,
    parent: Option<MergeNodeId>,
    children: Vec<MergeNodeId>,
    is_sorted: bool,
}

/// Arena of merge-tree nodes. Node 0 is always the root.
#[derive(Debug, Clone)]
pub struct MergeTree {
    nodes: Vec<ArenaNode>,
}

impl MergeTree {
    /// Creates a tree holding only the root.
    pub fn new(root_array: Vec<i64>) -> Self {
        let is_sorted = root_array.len() <= 1;
        MergeTree {
            nodes: vec![ArenaNode {
                array: root_array,
                level: 0,
                parent: None,
                children: Vec::new(),
                is_sorted,
            }],
        }
    }

    pub fn root(&self) -> MergeNodeId {
        MergeNodeId(0)
    }

    /// Appends a child of `parent`. Singletons and empty slices start sorted.
    pub fn add_child(&mut self, parent: MergeNodeId, array: Vec<i64>) -> MergeNodeId {
        let id = MergeNodeId(self.nodes.len() as u32);
        let level = self.nodes[parent.0 as usize].level + 1;
        let is_sorted = array.len() <= 1;
        self.nodes.push(ArenaNode {
            array,
            level,
            parent: Some(parent),
            children: Vec::new(),
            is_sorted,
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn array(&self, id: MergeNodeId) -> &[i64] {
        &self.nodes[id.0 as usize].array
    }

    pub fn level(&self, id: MergeNodeId) -> usize {
        self.nodes[id.0 as usize].level
    }

    pub fn children(&self, id: MergeNodeId) -> &[MergeNodeId] {
        &self.nodes[id.0 as usize].children
    }

    pub fn is_sorted(&self, id: MergeNodeId) -> bool {
        self.nodes[id.0 as usize].is_sorted
    }

    /// Replaces a node's content with its merged result and marks it sorted.
    pub fn mark_sorted(&mut self, id: MergeNodeId, merged: Vec<i64>) {
        let node = &mut self.nodes[id.0 as usize];
        node.array = merged;
        node.is_sorted = true;
    }

    /// Nested copy of the whole tree with `active` nodes flagged.
    pub fn snapshot(&self, active: &[MergeNodeId]) -> MergeTreeNode {
        self.snapshot_from(self.root(), active)
    }

    fn snapshot_from(&self, id: MergeNodeId, active: &[MergeNodeId]) -> MergeTreeNode {
        let node = &self.nodes[id.0 as usize];
        MergeTreeNode {
            id,
            array: node.array.clone(),
            level: node.level,
            children: node
                .children
                .iter()
                .map(|child| self.snapshot_from(*child, active))
                .collect(),
            parent: node.parent,
            is_sorted: node.is_sorted,
            is_active: active.contains(&id),
        }
    }
}

/// A self-contained snapshot of one merge-tree node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeTreeNode {
    pub id: MergeNodeId,
    pub array: Vec<i64>,
    /// Depth from the root (root = 0).
    pub level: usize,
    pub children: Vec<MergeTreeNode>,
    pub parent: Option<MergeNodeId>,
    pub is_sorted: bool,
    pub is_active: bool,
}

impl MergeTreeNode {
    /// Depth-first search for a node by id.
    pub fn find(&self, id: MergeNodeId) -> Option<&MergeTreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Leaf nodes, left to right.
    pub fn leaves(&self) -> Vec<&MergeTreeNode> {
        if self.children.is_empty() {
            return vec![self];
        }
        self.children.iter().flat_map(|c| c.leaves()).collect()
    }

    /// Number of nodes in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(|c| c.count()).sum::<usize>()
    }

    /// Ids of every node flagged active in this subtree.
    pub fn active_ids(&self) -> Vec<MergeNodeId> {
        let mut ids = Vec::new();
        if self.is_active {
            ids.push(self.id);
        }
        for child in &self.children {
            ids.extend(child.active_ids());
        }
        ids
    }
}
