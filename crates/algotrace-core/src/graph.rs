//! Graph: the undirected node/edge model consumed by the traversal tracers.
//!
//! [`Graph`] wraps a petgraph `UnGraph` together with an insertion-ordered map
//! from [`NodeId`] to `NodeIndex`. Insertion order is part of the contract:
//! traversal tracers derive their adjacency lists from [`Graph::edges`], and
//! the order neighbors appear in decides the order they are explored.
//!
//! On the wire a graph is the plain `{ nodes, edges }` pair used by renderers;
//! deserialization goes through the same validating builder methods.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::NodeId;

/// A graph vertex with its display label and layout position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl GraphNode {
    /// Creates a node whose label equals its id, placed at the origin.
    pub fn unplaced(id: impl Into<NodeId>) -> Self {
        let id = id.into();
        GraphNode {
            label: id.0.clone(),
            id,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// An undirected edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Serialized form of a [`Graph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphParts {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

/// Undirected graph with stable, insertion-ordered nodes and edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphParts", into = "GraphParts")]
pub struct Graph {
    inner: UnGraph<GraphNode, ()>,
    index: IndexMap<NodeId, NodeIndex>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            inner: UnGraph::new_undirected(),
            index: IndexMap::new(),
        }
    }

    /// Builds a graph of unplaced nodes from id slices. Convenience for tests
    /// and ad hoc inputs.
    pub fn from_ids(nodes: &[&str], edges: &[(&str, &str)]) -> Result<Self, CoreError> {
        let mut graph = Graph::new();
        for id in nodes {
            graph.add_node(GraphNode::unplaced(*id))?;
        }
        for (from, to) in edges {
            graph.add_edge(*from, *to)?;
        }
        Ok(graph)
    }

    /// Adds a node. Fails if a node with the same id already exists.
    pub fn add_node(&mut self, node: GraphNode) -> Result<NodeIndex, CoreError> {
        if self.index.contains_key(&node.id) {
            return Err(CoreError::DuplicateNode { id: node.id });
        }
        let id = node.id.clone();
        let idx = self.inner.add_node(node);
        self.index.insert(id, idx);
        Ok(idx)
    }

    /// Adds an undirected edge. Both endpoints must already exist.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
    ) -> Result<(), CoreError> {
        let from = from.into();
        let to = to.into();
        let a = self.require(&from)?;
        let b = self.require(&to)?;
        self.inner.add_edge(a, b, ());
        Ok(())
    }

    fn require(&self, id: &NodeId) -> Result<NodeIndex, CoreError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| CoreError::UnknownNode { id: id.clone() })
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.index.values().map(move |idx| &self.inner[*idx])
    }

    /// Edges in insertion order, as `(from, to)` pairs in the orientation they
    /// were added.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.inner
            .edge_references()
            .map(move |e| (&self.inner[e.source()].id, &self.inner[e.target()].id))
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(&NodeId::from(id))
    }

    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.index_of(id).map(|idx| &self.inner[idx])
    }

    /// Read-only access to the underlying petgraph graph.
    pub fn as_petgraph(&self) -> &UnGraph<GraphNode, ()> {
        &self.inner
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl TryFrom<GraphParts> for Graph {
    type Error = CoreError;

    fn try_from(parts: GraphParts) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        for node in parts.nodes {
            graph.add_node(node)?;
        }
        for edge in parts.edges {
            graph.add_edge(edge.from, edge.to)?;
        }
        Ok(graph)
    }
}

impl From<Graph> for GraphParts {
    fn from(graph: Graph) -> Self {
        GraphParts {
            nodes: graph.nodes().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, to)| GraphEdge {
                    from: from.clone(),
                    to: to.clone(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// The fixed demo graphs offered by the playgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphPreset {
    /// Binary tree of depth two rooted at `A`.
    Tree,
    /// Pentagon with a chord through `F`.
    Cycle,
    /// Seven nodes with several alternative routes.
    Complex,
}

impl GraphPreset {
    pub const ALL: [GraphPreset; 3] = [GraphPreset::Tree, GraphPreset::Cycle, GraphPreset::Complex];

    fn layout(self) -> (&'static [(&'static str, f64, f64)], &'static [(&'static str, &'static str)]) {
        match self {
            GraphPreset::Tree => (
                &[
                    ("A", 250.0, 50.0),
                    ("B", 150.0, 150.0),
                    ("C", 350.0, 150.0),
                    ("D", 100.0, 250.0),
                    ("E", 200.0, 250.0),
                    ("F", 300.0, 250.0),
                    ("G", 400.0, 250.0),
                ],
                &[("A", "B"), ("A", "C"), ("B", "D"), ("B", "E"), ("C", "F"), ("C", "G")],
            ),
            GraphPreset::Cycle => (
                &[
                    ("A", 250.0, 50.0),
                    ("B", 400.0, 150.0),
                    ("C", 350.0, 300.0),
                    ("D", 150.0, 300.0),
                    ("E", 100.0, 150.0),
                    ("F", 250.0, 200.0),
                ],
                &[
                    ("A", "B"),
                    ("B", "C"),
                    ("C", "D"),
                    ("D", "E"),
                    ("E", "A"),
                    ("A", "F"),
                    ("F", "C"),
                ],
            ),
            GraphPreset::Complex => (
                &[
                    ("A", 100.0, 100.0),
                    ("B", 250.0, 50.0),
                    ("C", 400.0, 100.0),
                    ("D", 100.0, 250.0),
                    ("E", 250.0, 200.0),
                    ("F", 400.0, 250.0),
                    ("G", 250.0, 350.0),
                ],
                &[
                    ("A", "B"),
                    ("A", "D"),
                    ("B", "C"),
                    ("B", "E"),
                    ("C", "F"),
                    ("D", "E"),
                    ("E", "F"),
                    ("E", "G"),
                    ("F", "G"),
                ],
            ),
        }
    }

    /// Materializes the preset as a [`Graph`].
    pub fn build(self) -> Graph {
        let built = self.try_build();
        debug_assert!(built.is_ok(), "preset {} table is inconsistent", self.as_str());
        built.unwrap_or_default()
    }

    /// Builds the preset through the validating graph builders, surfacing any
    /// duplicate id or dangling edge in the preset table.
    pub fn try_build(self) -> Result<Graph, CoreError> {
        let (nodes, edges) = self.layout();
        let mut graph = Graph::new();
        for (id, x, y) in nodes {
            graph.add_node(GraphNode {
                id: NodeId::from(*id),
                label: id.to_string(),
                x: *x,
                y: *y,
            })?;
        }
        for (from, to) in edges {
            graph.add_edge(*from, *to)?;
        }
        Ok(graph)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GraphPreset::Tree => "tree",
            GraphPreset::Cycle => "cycle",
            GraphPreset::Complex => "complex",
        }
    }
}

impl fmt::Display for GraphPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(GraphPreset::Tree),
            "cycle" => Ok(GraphPreset::Cycle),
            "complex" => Ok(GraphPreset::Complex),
            _ => Err(CoreError::UnknownPreset { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_rejects_unknown_endpoint() {
        let mut graph = Graph::from_ids(&["A", "B"], &[]).unwrap();
        let err = graph.add_edge("A", "Z").unwrap_err();
        assert_eq!(err, CoreError::UnknownNode { id: NodeId::from("Z") });
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_node_rejects_duplicates() {
        let mut graph = Graph::new();
        graph.add_node(GraphNode::unplaced("A")).unwrap();
        let err = graph.add_node(GraphNode::unplaced("A")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateNode { .. }));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn edges_keep_insertion_order_and_orientation() {
        let graph = Graph::from_ids(&["A", "B", "C"], &[("B", "C"), ("A", "B")]).unwrap();
        let edges: Vec<(String, String)> = graph
            .edges()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        assert_eq!(
            edges,
            vec![("B".to_string(), "C".to_string()), ("A".to_string(), "B".to_string())]
        );
    }

    #[test]
    fn presets_have_expected_shape() {
        let tree = GraphPreset::Tree.build();
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.edge_count(), 6);

        let cycle = GraphPreset::Cycle.build();
        assert_eq!(cycle.node_count(), 6);
        assert_eq!(cycle.edge_count(), 7);

        let complex = GraphPreset::Complex.build();
        assert_eq!(complex.node_count(), 7);
        assert_eq!(complex.edge_count(), 9);
    }

    #[test]
    fn preset_tables_are_consistent() {
        for preset in GraphPreset::ALL {
            let graph = preset.try_build().unwrap();
            let (nodes, edges) = preset.layout();
            assert_eq!(graph.node_count(), nodes.len(), "{}", preset);
            assert_eq!(graph.edge_count(), edges.len(), "{}", preset);
        }
    }

    #[test]
    fn preset_from_str_roundtrip() {
        for preset in GraphPreset::ALL {
            assert_eq!(preset.as_str().parse::<GraphPreset>().unwrap(), preset);
        }
        assert!("lattice".parse::<GraphPreset>().is_err());
    }

    #[test]
    fn graph_json_uses_nodes_and_edges() {
        let graph = Graph::from_ids(&["A", "B"], &[("A", "B")]).unwrap();
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["nodes"][1]["id"], "B");
        assert_eq!(json["edges"][0]["from"], "A");
        assert_eq!(json["edges"][0]["to"], "B");

        let back: Graph = serde_json::from_value(json).unwrap();
        assert_eq!(back.node_count(), 2);
        assert_eq!(back.edge_count(), 1);
    }

    #[test]
    fn deserializing_dangling_edge_fails() {
        let json = serde_json::json!({
            "nodes": [{ "id": "A", "label": "A", "x": 0.0, "y": 0.0 }],
            "edges": [{ "from": "A", "to": "B" }]
        });
        assert!(serde_json::from_value::<Graph>(json).is_err());
    }
}
