//! Graph traversal tracers and the helpers they share.

pub mod bfs;
pub mod dfs;

use std::collections::HashMap;

use algotrace_core::{Graph, NodeId};

/// Undirected adjacency list. Each node's neighbors appear in edge insertion
/// order.
pub(crate) struct Adjacency {
    neighbors: HashMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    pub(crate) fn new(graph: &Graph) -> Self {
        let mut neighbors: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for node in graph.nodes() {
            neighbors.entry(node.id.clone()).or_default();
        }
        for (from, to) in graph.edges() {
            neighbors.entry(from.clone()).or_default().push(to.clone());
            neighbors.entry(to.clone()).or_default().push(from.clone());
        }
        Adjacency { neighbors }
    }

    /// Neighbors of `id`; empty for ids the graph does not contain.
    pub(crate) fn neighbors(&self, id: &NodeId) -> &[NodeId] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Follows `parents` from `target` back to `start` and returns the path
/// start-first. Empty when the chain does not reach `start`.
pub(crate) fn reconstruct_path(
    parents: &HashMap<NodeId, NodeId>,
    start: &NodeId,
    target: &NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != start {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Renders node ids as `A, B, C` for descriptions.
pub(crate) fn join_ids(ids: &[NodeId]) -> String {
    ids.iter().map(NodeId::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::GraphPreset;

    #[test]
    fn adjacency_is_symmetric_and_ordered() {
        let adj = Adjacency::new(&GraphPreset::Tree.build());
        let a: Vec<&str> = adj.neighbors(&"A".into()).iter().map(NodeId::as_str).collect();
        assert_eq!(a, vec!["B", "C"]);
        let b: Vec<&str> = adj.neighbors(&"B".into()).iter().map(NodeId::as_str).collect();
        assert_eq!(b, vec!["A", "D", "E"]);
        assert!(adj.neighbors(&"Z".into()).is_empty());
    }

    #[test]
    fn path_reconstruction() {
        let mut parents = HashMap::new();
        parents.insert(NodeId::from("C"), NodeId::from("A"));
        parents.insert(NodeId::from("G"), NodeId::from("C"));
        let path = reconstruct_path(&parents, &"A".into(), &"G".into());
        assert_eq!(path, vec![NodeId::from("A"), "C".into(), "G".into()]);

        let start_only = reconstruct_path(&parents, &"A".into(), &"A".into());
        assert_eq!(start_only, vec![NodeId::from("A")]);

        assert!(reconstruct_path(&parents, &"A".into(), &"Q".into()).is_empty());
    }
}
