//! Merge sort tracer over an explicit recursion tree.
//!
//! Two phases share one [`MergeTree`] arena:
//! 1. Split: nodes are halved top-down (`mid = len / 2`), children created
//!    left then right, one `Split` step per internal node.
//! 2. Merge: post-order; each internal node merges its children's sorted runs
//!    with a stable comparison, emitting `Merge`, `Compare` and a terminal
//!    `Sorted` step.
//!
//! Every step carries a fresh snapshot of the whole tree.

use algotrace_core::merge_tree::MergeTree;
use algotrace_core::step::{format_values, MergeProgress, MergeSide, MergeSortStep, MergeStepKind};
use algotrace_core::MergeNodeId;

struct Tracer {
    tree: MergeTree,
    steps: Vec<MergeSortStep>,
}

impl Tracer {
    fn push(
        &mut self,
        kind: MergeStepKind,
        node: MergeNodeId,
        merge: Option<MergeProgress>,
        description: String,
    ) {
        let mut involved = vec![node];
        involved.extend_from_slice(self.tree.children(node));
        let sorted_node_id = (kind == MergeStepKind::Sorted).then_some(node);
        self.steps.push(MergeSortStep {
            kind,
            tree: self.tree.snapshot(&[node]),
            involved,
            sorted_node_id,
            merge,
            description,
        });
    }

    fn split(&mut self, node: MergeNodeId) {
        let array = self.tree.array(node).to_vec();
        if array.len() <= 1 {
            return;
        }
        let mid = array.len() / 2;
        let left = self.tree.add_child(node, array[..mid].to_vec());
        let right = self.tree.add_child(node, array[mid..].to_vec());

        self.push(
            MergeStepKind::Split,
            node,
            None,
            format!(
                "Node {} splits {} into {} and {}",
                node,
                format_values(&array),
                format_values(&array[..mid]),
                format_values(&array[mid..])
            ),
        );

        self.split(left);
        self.split(right);
    }

    fn merge(&mut self, node: MergeNodeId) {
        let children = self.tree.children(node).to_vec();
        let [left_id, right_id] = match children.as_slice() {
            [l, r] => [*l, *r],
            _ => return,
        };
        self.merge(left_id);
        self.merge(right_id);

        let left = self.tree.array(left_id).to_vec();
        let right = self.tree.array(right_id).to_vec();
        let mut progress = MergeProgress {
            left: left.clone(),
            right: right.clone(),
            result: Vec::with_capacity(left.len() + right.len()),
            left_index: 0,
            right_index: 0,
            taken_from: None,
        };

        self.push(
            MergeStepKind::Merge,
            node,
            Some(progress.clone()),
            format!(
                "Node {} merges {} and {}",
                node,
                format_values(&left),
                format_values(&right)
            ),
        );

        while progress.left_index < left.len() && progress.right_index < right.len() {
            let l = left[progress.left_index];
            let r = right[progress.right_index];
            self.push(
                MergeStepKind::Compare,
                node,
                Some(progress.clone()),
                format!("Node {} compares {} (left) with {} (right)", node, l, r),
            );

            // `<=` keeps equal elements in left-then-right order.
            let description = if l <= r {
                progress.result.push(l);
                progress.left_index += 1;
                progress.taken_from = Some(MergeSide::Left);
                format!("{} <= {}: taking {} from the left", l, r, l)
            } else {
                progress.result.push(r);
                progress.right_index += 1;
                progress.taken_from = Some(MergeSide::Right);
                format!("{} > {}: taking {} from the right", l, r, r)
            };
            self.push(MergeStepKind::Merge, node, Some(progress.clone()), description);
        }

        while progress.left_index < left.len() {
            let l = left[progress.left_index];
            progress.result.push(l);
            progress.left_index += 1;
            progress.taken_from = Some(MergeSide::Left);
            self.push(
                MergeStepKind::Merge,
                node,
                Some(progress.clone()),
                format!("Appending remaining {} from the left", l),
            );
        }

        while progress.right_index < right.len() {
            let r = right[progress.right_index];
            progress.result.push(r);
            progress.right_index += 1;
            progress.taken_from = Some(MergeSide::Right);
            self.push(
                MergeStepKind::Merge,
                node,
                Some(progress.clone()),
                format!("Appending remaining {} from the right", r),
            );
        }

        let merged = progress.result.clone();
        self.tree.mark_sorted(node, merged.clone());
        self.push(
            MergeStepKind::Sorted,
            node,
            Some(progress),
            format!("Node {} is sorted: {}", node, format_values(&merged)),
        );
    }
}

/// Traces merge sort over `array`.
///
/// The last step is always the root's `Sorted` step, whose tree root holds
/// the fully ordered array. Inputs of length 0 or 1 produce that step alone.
pub fn generate_merge_sort_steps(array: &[i64]) -> Vec<MergeSortStep> {
    let mut tracer = Tracer {
        tree: MergeTree::new(array.to_vec()),
        steps: Vec::new(),
    };
    let root = tracer.tree.root();

    tracer.split(root);
    tracer.merge(root);

    if array.len() <= 1 {
        tracer.push(
            MergeStepKind::Sorted,
            root,
            None,
            format!("{} is already sorted", format_values(array)),
        );
    } else if let Some(last) = tracer.steps.last_mut() {
        last.description = format!(
            "Merge sort complete: {}",
            format_values(tracer.tree.array(root))
        );
    }

    tracing::debug!(
        algorithm = "merge-sort",
        len = array.len(),
        nodes = tracer.tree.len(),
        steps = tracer.steps.len(),
        "generated trace"
    );
    tracer.steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_step_is_root_sorted() {
        let steps = generate_merge_sort_steps(&[5, 3, 8, 1]);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, MergeStepKind::Sorted);
        assert_eq!(last.sorted_node_id, Some(MergeNodeId(0)));
        assert_eq!(last.tree.array, vec![1, 3, 5, 8]);
        assert!(last.tree.is_sorted);
    }

    #[test]
    fn split_steps_follow_preorder_creation() {
        let steps = generate_merge_sort_steps(&[4, 3, 2, 1]);
        let splits: Vec<MergeNodeId> = steps
            .iter()
            .filter(|s| s.kind == MergeStepKind::Split)
            .map(|s| s.involved[0])
            .collect();
        // root 0 creates 1,2; node 1 creates 3,4; node 2 creates 5,6
        assert_eq!(splits, vec![MergeNodeId(0), MergeNodeId(1), MergeNodeId(2)]);
        assert_eq!(steps[0].involved, vec![MergeNodeId(0), MergeNodeId(1), MergeNodeId(2)]);
    }

    #[test]
    fn one_sorted_step_per_internal_node() {
        let steps = generate_merge_sort_steps(&[7, 2, 9, 4, 1]);
        let splits = steps.iter().filter(|s| s.kind == MergeStepKind::Split).count();
        let sorted = steps.iter().filter(|s| s.kind == MergeStepKind::Sorted).count();
        assert_eq!(splits, 4);
        assert_eq!(sorted, splits);
    }

    #[test]
    fn levels_and_halving() {
        let steps = generate_merge_sort_steps(&[5, 4, 3]);
        let tree = &steps.last().unwrap().tree;
        assert_eq!(tree.children[0].array, vec![5]);
        assert_eq!(tree.children[1].level, 1);
        assert_eq!(tree.children[1].children[0].level, 2);
    }

    #[test]
    fn snapshots_are_independent() {
        let steps = generate_merge_sort_steps(&[2, 1]);
        assert_eq!(steps[0].kind, MergeStepKind::Split);
        assert_eq!(steps[0].tree.array, vec![2, 1]);
        assert!(steps[0].tree.is_active);
        assert!(!steps[0].tree.is_sorted);
        assert_eq!(steps.last().unwrap().tree.array, vec![1, 2]);
    }

    #[test]
    fn ties_are_taken_from_the_left() {
        let steps = generate_merge_sort_steps(&[3, 3]);
        let first_move = steps
            .iter()
            .find(|s| {
                s.kind == MergeStepKind::Merge
                    && s.merge.as_ref().is_some_and(|m| m.taken_from.is_some())
            })
            .unwrap();
        assert_eq!(
            first_move.merge.as_ref().unwrap().taken_from,
            Some(MergeSide::Left)
        );
    }

    #[test]
    fn trivial_inputs_emit_single_sorted_step() {
        for input in [vec![], vec![9]] {
            let steps = generate_merge_sort_steps(&input);
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].kind, MergeStepKind::Sorted);
            assert_eq!(steps[0].tree.array, input);
        }
    }
}
