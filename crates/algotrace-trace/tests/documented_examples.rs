//! Worked examples for each tracer, with the concrete inputs and expected
//! outcomes the playground documents.

use std::collections::HashMap;

use algotrace_core::input::parse_delimited_numbers;
use algotrace_core::step::{
    BinarySearchStep, CountingStepKind, MergeSide, MergeStepKind, RadixStepKind, SearchStepKind,
};
use algotrace_core::{GraphPreset, MergeNodeId, NodeId, PivotStrategy, SortedIndices};
use algotrace_trace::{
    generate_binary_search_steps, generate_bubble_sort_steps, generate_counting_sort_steps,
    generate_dfs_steps, generate_insertion_sort_steps, generate_linear_search_steps,
    generate_merge_sort_steps, generate_quick_sort_steps, generate_radix_sort_steps,
    generate_selection_sort_steps,
};

const FOUR: [i64; 4] = [5, 3, 8, 1];
const FOUR_SORTED: [i64; 4] = [1, 3, 5, 8];

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[test]
fn every_sort_orders_the_four_element_example() {
    assert_eq!(generate_bubble_sort_steps(&FOUR).last().unwrap().array, FOUR_SORTED);
    assert_eq!(generate_insertion_sort_steps(&FOUR).last().unwrap().array, FOUR_SORTED);
    assert_eq!(generate_selection_sort_steps(&FOUR).last().unwrap().array, FOUR_SORTED);
    assert_eq!(generate_merge_sort_steps(&FOUR).last().unwrap().tree.array, FOUR_SORTED);
    for strategy in PivotStrategy::ALL {
        assert_eq!(
            generate_quick_sort_steps(&FOUR, strategy).last().unwrap().array,
            FOUR_SORTED
        );
    }
    assert_eq!(
        generate_counting_sort_steps(&FOUR).unwrap().last().unwrap().placed(),
        FOUR_SORTED
    );
    assert_eq!(generate_radix_sort_steps(&FOUR).last().unwrap().array, FOUR_SORTED);
}

#[test]
fn comparison_sorts_mark_every_index_sorted() {
    let all: SortedIndices = (0..FOUR.len()).collect();
    assert_eq!(generate_bubble_sort_steps(&FOUR).last().unwrap().sorted_indices, all);
    assert_eq!(generate_insertion_sort_steps(&FOUR).last().unwrap().sorted_indices, all);
    assert_eq!(generate_selection_sort_steps(&FOUR).last().unwrap().sorted_indices, all);
    assert_eq!(
        generate_quick_sort_steps(&FOUR, PivotStrategy::Median)
            .last()
            .unwrap()
            .sorted_indices,
        all
    );
}

#[test]
fn radix_first_pass_buckets_by_ones_digit() {
    let steps = generate_radix_sort_steps(&[170, 45, 75, 90, 802, 24, 2, 66]);
    let after_first = steps
        .iter()
        .filter(|s| s.kind == RadixStepKind::Collect && s.current_digit == 0)
        .last()
        .unwrap();
    assert_eq!(after_first.array, vec![170, 90, 802, 2, 24, 45, 75, 66]);
    assert!(after_first.buckets.iter().all(Vec::is_empty));

    let after_second = steps
        .iter()
        .filter(|s| s.kind == RadixStepKind::Collect && s.current_digit == 1)
        .last()
        .unwrap();
    assert_eq!(after_second.array, vec![802, 2, 24, 45, 66, 170, 75, 90]);

    assert_eq!(
        steps.last().unwrap().array,
        vec![2, 24, 45, 66, 75, 90, 170, 802]
    );
}

#[test]
fn radix_distributes_one_step_per_element_per_digit() {
    let input = [170, 45, 75, 90, 802, 24, 2, 66];
    let steps = generate_radix_sort_steps(&input);
    let placed = steps
        .iter()
        .filter(|s| s.kind == RadixStepKind::Distribute && s.current_index.is_some())
        .count();
    assert_eq!(placed, input.len() * 3);
}

#[test]
fn counting_sort_handles_negative_values() {
    let steps = generate_counting_sort_steps(&[5, -2, 3, -1, 0, 4]).unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last.placed(), vec![-2, -1, 0, 3, 4, 5]);
    assert_eq!(last.min_value, -2);
    assert_eq!(last.max_value, 5);
    assert!(steps.iter().all(|s| s.min_value == -2 && s.max_value == 5));
}

#[test]
fn counting_sort_is_stable() {
    // Equal values at input positions 0, 2 and 4 must keep that order.
    let input = [2, 1, 2, 1, 2];
    let steps = generate_counting_sort_steps(&input).unwrap();
    let mut output_of: HashMap<usize, usize> = HashMap::new();
    for step in steps.iter().filter(|s| s.kind == CountingStepKind::Place) {
        if let (Some(i), Some(&pos)) = (step.current_index, step.highlight_output.first()) {
            output_of.insert(i, pos);
        }
    }
    assert_eq!(output_of.len(), input.len());
    for i in 0..input.len() {
        for j in i + 1..input.len() {
            if input[i] == input[j] {
                assert!(output_of[&i] < output_of[&j], "{} and {} swapped", i, j);
            }
        }
    }
}

#[test]
fn merge_sort_is_stable() {
    // Every tie between the two run heads is resolved from the left run.
    let steps = generate_merge_sort_steps(&[3, 1, 3, 1, 3, 2, 1]);
    let mut ties = 0;
    for pair in steps.windows(2) {
        let (compare, taken) = (&pair[0], &pair[1]);
        if compare.kind != MergeStepKind::Compare {
            continue;
        }
        let progress = compare.merge.as_ref().unwrap();
        if progress.left[progress.left_index] == progress.right[progress.right_index] {
            ties += 1;
            let after = taken.merge.as_ref().unwrap();
            assert_eq!(after.taken_from, Some(MergeSide::Left));
        }
    }
    assert!(ties > 0);
}

#[test]
fn merge_sort_keeps_equal_values_in_input_order() {
    // Replays every move to learn which input position each output value
    // came from. Leaves, left to right, hold the input positions in order.
    let input = [3, 1, 3, 1, 3, 2, 1];
    let steps = generate_merge_sort_steps(&input);
    let root = &steps.last().unwrap().tree;

    let mut origins: HashMap<MergeNodeId, Vec<usize>> = HashMap::new();
    for (position, leaf) in root.leaves().into_iter().enumerate() {
        origins.insert(leaf.id, vec![position]);
    }
    let mut consumed: HashMap<MergeNodeId, usize> = HashMap::new();
    for step in &steps {
        if step.kind != MergeStepKind::Merge {
            continue;
        }
        let side = match step.merge.as_ref().and_then(|m| m.taken_from) {
            Some(side) => side,
            None => continue,
        };
        let child = match side {
            MergeSide::Left => step.involved[1],
            MergeSide::Right => step.involved[2],
        };
        let next = consumed.entry(child).or_insert(0);
        let origin = origins[&child][*next];
        *next += 1;
        origins.entry(step.involved[0]).or_default().push(origin);
    }

    let order = &origins[&root.id];
    let values: Vec<i64> = order.iter().map(|&i| input[i]).collect();
    assert_eq!(values, root.array);
    for pair in order.windows(2) {
        if input[pair[0]] == input[pair[1]] {
            assert!(pair[0] < pair[1], "{} placed after {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn merge_tree_ids_are_unique_and_creation_ordered() {
    let steps = generate_merge_sort_steps(&[8, 7, 6, 5, 4, 3]);
    let tree = &steps.last().unwrap().tree;
    assert_eq!(tree.id.0, 0);
    let count = tree.count();
    for id in 0..count as u32 {
        assert!(tree.find(MergeNodeId(id)).is_some());
    }
    for child in &tree.children {
        assert!(child.id > tree.id);
        assert_eq!(child.level, tree.level + 1);
    }
}

// ---------------------------------------------------------------------------
// Searching
// ---------------------------------------------------------------------------

const ODDS: [i64; 10] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

#[test]
fn binary_search_finds_seven() {
    let steps = generate_binary_search_steps(&ODDS, 7);
    let found: Vec<&BinarySearchStep> = steps.iter().filter(|s| s.found).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].mid.map(|m| found[0].sorted_array[m]), Some(7));
}

#[test]
fn binary_search_misses_four_in_logarithmic_steps() {
    let steps = generate_binary_search_steps(&ODDS, 4);
    assert!(steps.iter().all(|s| !s.found));
    let probes = steps.iter().filter(|s| s.kind == SearchStepKind::Probe).count();
    // floor(log2(10)) + 1
    assert!(probes <= 4, "{} probes", probes);
    assert_eq!(steps.last().unwrap().kind, SearchStepKind::NotFound);
}

#[test]
fn linear_search_counts_comparisons() {
    let steps = generate_linear_search_steps(&[5, 2, 8, 1, 9, 3], 8);
    let found = steps.iter().find(|s| s.found).unwrap();
    assert_eq!(found.comparisons, 3);
    assert_eq!(found.current_index, Some(2));
}

#[test]
fn tracers_are_deterministic() {
    assert_eq!(
        generate_linear_search_steps(&[5, 2, 8], 2),
        generate_linear_search_steps(&[5, 2, 8], 2)
    );
    assert_eq!(
        generate_binary_search_steps(&ODDS, 13),
        generate_binary_search_steps(&ODDS, 13)
    );
    let graph = GraphPreset::Complex.build();
    let (a, g) = (NodeId::from("A"), NodeId::from("G"));
    assert_eq!(
        generate_dfs_steps(&graph, &a, &g),
        generate_dfs_steps(&graph, &a, &g)
    );
}

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

#[test]
fn parsing_feeds_the_tracers() {
    assert_eq!(parse_delimited_numbers("5, 2, 8, 1, 9, 3"), vec![5, 2, 8, 1, 9, 3]);
    assert_eq!(parse_delimited_numbers("5,,abc,3"), vec![5, 3]);
    let steps = generate_bubble_sort_steps(&parse_delimited_numbers("3, x, 1"));
    assert_eq!(steps.last().unwrap().array, vec![1, 3]);
}
