//! Graph tracers checked against `petgraph::algo`.
//!
//! On unit-weight graphs Dijkstra distances are hop counts, so the BFS path
//! must have exactly that many edges, and reachability must agree for both
//! tracers.

use algotrace_core::step::{BfsStepKind, DfsStepKind};
use algotrace_core::{Graph, GraphNode, GraphPreset, NodeId};
use algotrace_trace::{generate_bfs_steps, generate_dfs_steps};
use petgraph::algo::dijkstra;

fn hop_distance(graph: &Graph, from: &NodeId, to: &NodeId) -> Option<usize> {
    let pg = graph.as_petgraph();
    let start = graph.index_of(from)?;
    let goal = graph.index_of(to)?;
    dijkstra(pg, start, Some(goal), |_| 1usize).get(&goal).copied()
}

fn ids(graph: &Graph) -> Vec<NodeId> {
    graph.nodes().map(|n| n.id.clone()).collect()
}

#[test]
fn bfs_paths_are_shortest_on_every_preset() {
    for preset in GraphPreset::ALL {
        let graph = preset.build();
        for start in ids(&graph) {
            for goal in ids(&graph) {
                let steps = generate_bfs_steps(&graph, &start, &goal);
                let last = steps.last().unwrap();
                assert_eq!(last.kind, BfsStepKind::Found, "{} {} -> {}", preset, start, goal);
                let expected = hop_distance(&graph, &start, &goal).unwrap();
                assert_eq!(last.path.len() - 1, expected, "{} {} -> {}", preset, start, goal);
                assert_eq!(last.path.first(), Some(&start));
                assert_eq!(last.path.last(), Some(&goal));
            }
        }
    }
}

#[test]
fn bfs_tree_example_path() {
    let graph = GraphPreset::Tree.build();
    let steps = generate_bfs_steps(&graph, &"A".into(), &"G".into());
    let path: Vec<&str> = steps.last().unwrap().path.iter().map(NodeId::as_str).collect();
    assert_eq!(path, vec!["A", "C", "G"]);
}

#[test]
fn bfs_never_revisits() {
    for preset in GraphPreset::ALL {
        let graph = preset.build();
        let steps = generate_bfs_steps(&graph, &"A".into(), &"missing".into());
        let dequeues = steps
            .iter()
            .filter(|s| s.kind == BfsStepKind::Dequeue)
            .count();
        assert_eq!(dequeues, graph.node_count());
        let visited = &steps.last().unwrap().visited;
        let mut unique = visited.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), visited.len());
    }
}

#[test]
fn dfs_paths_are_real_paths() {
    for preset in GraphPreset::ALL {
        let graph = preset.build();
        let pg = graph.as_petgraph();
        for goal in ids(&graph) {
            let steps = generate_dfs_steps(&graph, &"A".into(), &goal);
            let last = steps.last().unwrap();
            assert_eq!(last.kind, DfsStepKind::Found);
            for pair in last.path.windows(2) {
                let a = graph.index_of(&pair[0]).unwrap();
                let b = graph.index_of(&pair[1]).unwrap();
                assert!(pg.contains_edge(a, b), "{} -> {} in {}", pair[0], pair[1], preset);
            }
        }
    }
}

#[test]
fn dfs_terminates_on_the_cycle_graph() {
    let graph = GraphPreset::Cycle.build();
    let steps = generate_dfs_steps(&graph, &"A".into(), &"nowhere".into());
    let last = steps.last().unwrap();
    assert_eq!(last.kind, DfsStepKind::Complete);
    assert!(!last.target_found);
    assert!(last.path.is_empty());
    assert_eq!(last.visited.len(), graph.node_count());
}

#[test]
fn unreachable_target_agrees_with_oracle() {
    let mut graph = GraphPreset::Tree.build();
    graph.add_node(GraphNode::unplaced("H")).unwrap();
    graph.add_node(GraphNode::unplaced("I")).unwrap();
    graph.add_edge("H", "I").unwrap();

    let (a, i) = (NodeId::from("A"), NodeId::from("I"));
    assert_eq!(hop_distance(&graph, &a, &i), None);

    let bfs = generate_bfs_steps(&graph, &a, &i);
    assert_eq!(bfs.last().unwrap().kind, BfsStepKind::Complete);
    let dfs = generate_dfs_steps(&graph, &a, &i);
    assert_eq!(dfs.last().unwrap().kind, DfsStepKind::Complete);

    let h = NodeId::from("H");
    let found = generate_bfs_steps(&graph, &h, &i);
    assert_eq!(found.last().unwrap().path, vec![h, i]);
}
