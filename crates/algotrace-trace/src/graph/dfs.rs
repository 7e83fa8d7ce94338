//! Depth-first search tracer over an explicit stack.
//!
//! Neighbors are pushed in reverse so the first-listed one is popped first. A
//! node may sit on the stack more than once; popping an already visited copy
//! is traced as a `Backtrack` step.

use std::collections::{HashMap, HashSet};

use algotrace_core::step::{DfsStep, DfsStepKind};
use algotrace_core::{Graph, NodeId};

use super::{join_ids, reconstruct_path, Adjacency};

struct Recorder {
    steps: Vec<DfsStep>,
}

impl Recorder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        kind: DfsStepKind,
        current: Option<&NodeId>,
        stack: &[NodeId],
        visited: &[NodeId],
        exploring: Vec<NodeId>,
        path: Vec<NodeId>,
        description: String,
    ) {
        self.steps.push(DfsStep {
            kind,
            current_node: current.cloned(),
            stack: stack.to_vec(),
            visited: visited.to_vec(),
            exploring,
            target_found: kind == DfsStepKind::Found,
            path,
            description,
        });
    }
}

/// Traces an iterative depth-first search of `graph` from `start` towards
/// `target`.
///
/// Each node's parent is the first visited node that pushed it, so the
/// `Found` path is a valid path though not necessarily a shortest one.
pub fn generate_dfs_steps(graph: &Graph, start: &NodeId, target: &NodeId) -> Vec<DfsStep> {
    let adjacency = Adjacency::new(graph);
    let mut rec = Recorder { steps: Vec::new() };
    let mut stack: Vec<NodeId> = vec![start.clone()];
    let mut visited: Vec<NodeId> = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut found = false;

    rec.push(
        DfsStepKind::Start,
        None,
        &stack,
        &visited,
        Vec::new(),
        Vec::new(),
        format!("Depth-first search from {} looking for {}", start, target),
    );

    while let Some(current) = stack.pop() {
        if seen.contains(&current) {
            rec.push(
                DfsStepKind::Backtrack,
                Some(&current),
                &stack,
                &visited,
                Vec::new(),
                Vec::new(),
                format!("{} was already visited, backtracking", current),
            );
            continue;
        }

        seen.insert(current.clone());
        visited.push(current.clone());
        tracing::trace!(node = %current, depth = stack.len(), "dfs pop");
        rec.push(
            DfsStepKind::Pop,
            Some(&current),
            &stack,
            &visited,
            Vec::new(),
            Vec::new(),
            format!("Pop {} and mark it visited", current),
        );

        if &current == target {
            let path = reconstruct_path(&parents, start, target);
            let description = format!("Found {}! Path: {}", target, join_ids(&path));
            rec.push(
                DfsStepKind::Found,
                Some(&current),
                &stack,
                &visited,
                Vec::new(),
                path,
                description,
            );
            found = true;
            break;
        }

        let unvisited: Vec<NodeId> = adjacency
            .neighbors(&current)
            .iter()
            .filter(|n| !seen.contains(*n))
            .cloned()
            .collect();

        if unvisited.is_empty() {
            rec.push(
                DfsStepKind::Visit,
                Some(&current),
                &stack,
                &visited,
                Vec::new(),
                Vec::new(),
                format!("{} has no unvisited neighbors", current),
            );
            continue;
        }

        rec.push(
            DfsStepKind::Explore,
            Some(&current),
            &stack,
            &visited,
            unvisited.clone(),
            Vec::new(),
            format!("Unvisited neighbors of {}: {}", current, join_ids(&unvisited)),
        );

        for next in unvisited.iter().rev() {
            parents
                .entry(next.clone())
                .or_insert_with(|| current.clone());
            stack.push(next.clone());
        }
        let description = format!("Push {} onto the stack", join_ids(&unvisited));
        rec.push(
            DfsStepKind::Push,
            Some(&current),
            &stack,
            &visited,
            unvisited,
            Vec::new(),
            description,
        );
    }

    if !found {
        rec.push(
            DfsStepKind::Complete,
            None,
            &stack,
            &visited,
            Vec::new(),
            Vec::new(),
            format!(
                "Stack is empty: {} is not reachable from {} ({} nodes visited)",
                target,
                start,
                visited.len()
            ),
        );
    }

    tracing::debug!(
        algorithm = "dfs",
        nodes = graph.node_count(),
        visited = visited.len(),
        steps = rec.steps.len(),
        "generated trace"
    );
    rec.steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::GraphPreset;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| NodeId::from(*n)).collect()
    }

    #[test]
    fn tree_path_to_g() {
        let graph = GraphPreset::Tree.build();
        let steps = generate_dfs_steps(&graph, &"A".into(), &"G".into());
        let last = steps.last().unwrap();
        assert_eq!(last.kind, DfsStepKind::Found);
        assert_eq!(last.path, ids(&["A", "C", "G"]));
        // left subtree is exhausted first
        assert_eq!(last.visited, ids(&["A", "B", "D", "E", "C", "F", "G"]));
    }

    #[test]
    fn first_listed_neighbor_is_on_top() {
        let graph = GraphPreset::Tree.build();
        let steps = generate_dfs_steps(&graph, &"A".into(), &"G".into());
        let push = steps
            .iter()
            .find(|s| s.kind == DfsStepKind::Push)
            .unwrap();
        assert_eq!(push.stack, ids(&["C", "B"]));
    }

    #[test]
    fn cycle_terminates_and_backtracks() {
        let graph = GraphPreset::Cycle.build();
        let steps = generate_dfs_steps(&graph, &"A".into(), &"Z".into());
        let last = steps.last().unwrap();
        assert_eq!(last.kind, DfsStepKind::Complete);
        assert!(!last.target_found);
        assert_eq!(last.visited.len(), 6);
        assert!(steps.iter().any(|s| s.kind == DfsStepKind::Backtrack));
    }

    #[test]
    fn found_path_is_connected() {
        let graph = GraphPreset::Complex.build();
        let steps = generate_dfs_steps(&graph, &"A".into(), &"G".into());
        let path = &steps.last().unwrap().path;
        assert_eq!(path.first(), Some(&NodeId::from("A")));
        assert_eq!(path.last(), Some(&NodeId::from("G")));
        let adjacency = Adjacency::new(&graph);
        for pair in path.windows(2) {
            assert!(adjacency.neighbors(&pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn visited_never_repeats() {
        let graph = GraphPreset::Complex.build();
        let steps = generate_dfs_steps(&graph, &"D".into(), &"Z".into());
        let visited = &steps.last().unwrap().visited;
        let unique: HashSet<&NodeId> = visited.iter().collect();
        assert_eq!(unique.len(), visited.len());
        assert_eq!(visited.len(), 7);
    }
}
