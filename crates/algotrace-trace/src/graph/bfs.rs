//! Breadth-first search tracer.

use std::collections::{HashMap, HashSet, VecDeque};

use algotrace_core::step::{BfsStep, BfsStepKind};
use algotrace_core::{Graph, NodeId};

use super::{join_ids, reconstruct_path, Adjacency};

struct Recorder {
    steps: Vec<BfsStep>,
}

impl Recorder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        kind: BfsStepKind,
        current: Option<&NodeId>,
        queue: &VecDeque<NodeId>,
        visited: &[NodeId],
        exploring: Vec<NodeId>,
        path: Vec<NodeId>,
        description: String,
    ) {
        self.steps.push(BfsStep {
            kind,
            current_node: current.cloned(),
            queue: queue.iter().cloned().collect(),
            visited: visited.to_vec(),
            exploring,
            target_found: kind == BfsStepKind::Found,
            path,
            description,
        });
    }
}

/// Traces a breadth-first search of `graph` from `start` towards `target`.
///
/// A node is enqueued at most once, so it is dequeued and visited at most
/// once. On the unweighted graphs traced here the `path` of the `Found` step
/// is a shortest path. An unreachable target ends the trace with `Complete`.
pub fn generate_bfs_steps(graph: &Graph, start: &NodeId, target: &NodeId) -> Vec<BfsStep> {
    let adjacency = Adjacency::new(graph);
    let mut rec = Recorder { steps: Vec::new() };
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut discovered: HashSet<NodeId> = HashSet::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();

    rec.push(
        BfsStepKind::Start,
        None,
        &queue,
        &visited,
        Vec::new(),
        Vec::new(),
        format!("Breadth-first search from {} looking for {}", start, target),
    );

    queue.push_back(start.clone());
    discovered.insert(start.clone());
    rec.push(
        BfsStepKind::Enqueue,
        Some(start),
        &queue,
        &visited,
        Vec::new(),
        Vec::new(),
        format!("Enqueue the start node {}", start),
    );

    while let Some(current) = queue.pop_front() {
        visited.push(current.clone());
        tracing::trace!(node = %current, queued = queue.len(), "bfs dequeue");
        rec.push(
            BfsStepKind::Dequeue,
            Some(&current),
            &queue,
            &visited,
            Vec::new(),
            Vec::new(),
            format!("Dequeue {} and mark it visited", current),
        );

        if &current == target {
            let path = reconstruct_path(&parents, start, target);
            let description = format!(
                "Found {}! Path: {} ({} edges)",
                target,
                join_ids(&path),
                path.len().saturating_sub(1)
            );
            rec.push(
                BfsStepKind::Found,
                Some(&current),
                &queue,
                &visited,
                Vec::new(),
                path,
                description,
            );
            break;
        }

        let mut fresh = Vec::new();
        for next in adjacency.neighbors(&current) {
            if discovered.insert(next.clone()) {
                parents.insert(next.clone(), current.clone());
                queue.push_back(next.clone());
                fresh.push(next.clone());
            }
        }

        if fresh.is_empty() {
            rec.push(
                BfsStepKind::Visit,
                Some(&current),
                &queue,
                &visited,
                Vec::new(),
                Vec::new(),
                format!("{} has no undiscovered neighbors", current),
            );
        } else {
            let description = format!("Exploring from {}: enqueue {}", current, join_ids(&fresh));
            rec.push(
                BfsStepKind::Explore,
                Some(&current),
                &queue,
                &visited,
                fresh,
                Vec::new(),
                description,
            );
        }
    }

    if !rec.steps.last().is_some_and(|s| s.target_found) {
        rec.push(
            BfsStepKind::Complete,
            None,
            &queue,
            &visited,
            Vec::new(),
            Vec::new(),
            format!(
                "Queue is empty: {} is not reachable from {} ({} nodes visited)",
                target,
                start,
                visited.len()
            ),
        );
    }

    tracing::debug!(
        algorithm = "bfs",
        nodes = graph.node_count(),
        visited = visited.len(),
        steps = rec.steps.len(),
        "generated trace"
    );
    rec.steps
}
