//! Quick sort tracer (Lomuto partition, configurable pivot).
//!
//! Subranges are processed depth-first, left before right, from an explicit
//! work stack so that already-sorted inputs cannot exhaust the call stack.
//! The order of emitted steps matches the textbook recursive formulation.

use rand::Rng;

use algotrace_core::step::{
    format_values, PivotStrategy, QuickSortStep, QuickStepKind, SortedIndices,
};

struct Recorder {
    steps: Vec<QuickSortStep>,
    sorted: SortedIndices,
}

/// Index fields of one quick-sort step.
#[derive(Clone, Copy)]
struct Cursor {
    low: usize,
    high: usize,
    pivot_index: usize,
    boundary: isize,
    scan: usize,
}

impl Recorder {
    fn push(
        &mut self,
        kind: QuickStepKind,
        arr: &[i64],
        at: Cursor,
        highlight: Vec<usize>,
        description: String,
    ) {
        self.steps.push(QuickSortStep {
            kind,
            array: arr.to_vec(),
            low: at.low,
            high: at.high,
            pivot_index: at.pivot_index,
            boundary: at.boundary,
            scan: at.scan,
            highlight,
            sorted_indices: self.sorted.clone(),
            description,
        });
    }
}

/// Picks the pivot position for `arr[low..=high]`.
fn choose_pivot<R: Rng + ?Sized>(
    arr: &[i64],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    rng: &mut R,
) -> usize {
    match strategy {
        PivotStrategy::First => low,
        PivotStrategy::Last => high,
        PivotStrategy::Random => rng.gen_range(low..=high),
        PivotStrategy::Median => {
            let mid = low + (high - low) / 2;
            let mut values = [arr[low], arr[mid], arr[high]];
            values.sort_unstable();
            let median = values[1];
            if arr[low] == median {
                low
            } else if arr[mid] == median {
                mid
            } else {
                high
            }
        }
    }
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`. Returns the
/// pivot's final position.
fn partition(rec: &mut Recorder, arr: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut i = low as isize - 1;
    let cursor = |boundary: isize, scan: usize| Cursor {
        low,
        high,
        pivot_index: high,
        boundary,
        scan,
    };

    rec.push(
        QuickStepKind::Partition,
        arr,
        cursor(i, low),
        vec![high],
        format!("Partitioning {}..={} around pivot {}", low, high, pivot),
    );

    for j in low..high {
        rec.push(
            QuickStepKind::Compare,
            arr,
            cursor(i, j),
            vec![j, high],
            format!("Comparing {} with pivot {}", arr[j], pivot),
        );

        if arr[j] <= pivot {
            i += 1;
            let boundary = i as usize;
            if boundary != j {
                arr.swap(boundary, j);
                rec.push(
                    QuickStepKind::Swap,
                    arr,
                    cursor(i, j),
                    vec![boundary, j],
                    format!("Swapping {} and {}", arr[boundary], arr[j]),
                );
            }
        }
    }

    let place = (i + 1) as usize;
    arr.swap(place, high);
    rec.push(
        QuickStepKind::Swap,
        arr,
        Cursor {
            low,
            high,
            pivot_index: place,
            boundary: i + 1,
            scan: high,
        },
        vec![place, high],
        format!("Placing pivot {} at index {}", pivot, place),
    );
    place
}

/// Traces quick sort over a copy of `array`, with random pivots drawn from
/// `rng`.
pub fn generate_quick_sort_steps_with_rng<R: Rng + ?Sized>(
    array: &[i64],
    strategy: PivotStrategy,
    rng: &mut R,
) -> Vec<QuickSortStep> {
    let mut arr = array.to_vec();
    let n = arr.len();
    let last = n.saturating_sub(1);
    let mut rec = Recorder {
        steps: Vec::new(),
        sorted: SortedIndices::new(),
    };

    rec.push(
        QuickStepKind::Partition,
        &arr,
        Cursor {
            low: 0,
            high: last,
            pivot_index: last,
            boundary: -1,
            scan: 0,
        },
        Vec::new(),
        format!(
            "Starting quick sort ({} pivot) with {}",
            strategy,
            format_values(&arr)
        ),
    );

    // Inclusive ranges; `high < low` marks an empty subrange.
    let mut work: Vec<(isize, isize)> = vec![(0, n as isize - 1)];
    while let Some((low, high)) = work.pop() {
        if low > high {
            continue;
        }
        let (low, high) = (low as usize, high as usize);

        if low == high {
            rec.sorted.insert(low);
            rec.push(
                QuickStepKind::Sorted,
                &arr,
                Cursor {
                    low,
                    high,
                    pivot_index: low,
                    boundary: low as isize,
                    scan: low,
                },
                vec![low],
                format!("{} is a single element and already in place", arr[low]),
            );
            continue;
        }

        let pivot_index = choose_pivot(&arr, low, high, strategy, rng);
        if pivot_index != high {
            arr.swap(pivot_index, high);
            rec.push(
                QuickStepKind::Swap,
                &arr,
                Cursor {
                    low,
                    high,
                    pivot_index: high,
                    boundary: low as isize - 1,
                    scan: low,
                },
                vec![pivot_index, high],
                format!("Moving pivot {} to the end of the range", arr[high]),
            );
        }

        let p = partition(&mut rec, &mut arr, low, high);
        rec.sorted.insert(p);
        rec.push(
            QuickStepKind::Sorted,
            &arr,
            Cursor {
                low,
                high,
                pivot_index: p,
                boundary: p as isize,
                scan: p,
            },
            vec![p],
            format!("Pivot {} is in its final position", arr[p]),
        );

        // Right pushed first so the left side is processed first.
        work.push((p as isize + 1, high as isize));
        work.push((low as isize, p as isize - 1));
    }

    rec.sorted.extend(0..n);
    rec.push(
        QuickStepKind::Sorted,
        &arr,
        Cursor {
            low: 0,
            high: last,
            pivot_index: 0,
            boundary: 0,
            scan: last,
        },
        Vec::new(),
        "Array fully sorted".to_string(),
    );

    tracing::debug!(
        algorithm = "quick-sort",
        pivot = %strategy,
        len = n,
        steps = rec.steps.len(),
        "generated trace"
    );
    rec.steps
}

/// Traces quick sort over a copy of `array`. Random pivots use the thread
/// RNG; use [`generate_quick_sort_steps_with_rng`] for reproducible traces.
pub fn generate_quick_sort_steps(array: &[i64], strategy: PivotStrategy) -> Vec<QuickSortStep> {
    generate_quick_sort_steps_with_rng(array, strategy, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_strategy_sorts() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for strategy in PivotStrategy::ALL {
            let steps = generate_quick_sort_steps_with_rng(&[5, 3, 8, 1], strategy, &mut rng);
            let last = steps.last().unwrap();
            assert_eq!(last.array, vec![1, 3, 5, 8], "strategy {}", strategy);
            assert_eq!(last.sorted_indices, (0..4).collect::<SortedIndices>());
        }
    }

    #[test]
    fn median_prefers_low_then_mid_on_ties() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(choose_pivot(&[2, 9, 2], 0, 2, PivotStrategy::Median, &mut rng), 0);
        assert_eq!(choose_pivot(&[1, 5, 9], 0, 2, PivotStrategy::Median, &mut rng), 1);
        assert_eq!(choose_pivot(&[9, 1, 5], 0, 2, PivotStrategy::Median, &mut rng), 2);
        assert_eq!(choose_pivot(&[1, 4, 4], 0, 2, PivotStrategy::Median, &mut rng), 1);
    }

    #[test]
    fn first_pivot_is_moved_to_high() {
        let steps = generate_quick_sort_steps(&[3, 1, 2], PivotStrategy::First);
        let moved = &steps[1];
        assert_eq!(moved.kind, QuickStepKind::Swap);
        assert_eq!(moved.array, vec![2, 1, 3]);
        assert_eq!(moved.pivot_index, 2);
    }

    #[test]
    fn no_self_swaps_during_scan() {
        // Every element <= pivot and already left of it: i == j throughout.
        let steps = generate_quick_sort_steps(&[1, 2, 3], PivotStrategy::Last);
        let first_partition_swaps = steps
            .iter()
            .take_while(|s| s.kind != QuickStepKind::Sorted)
            .filter(|s| s.kind == QuickStepKind::Swap)
            .count();
        // only the final pivot placement
        assert_eq!(first_partition_swaps, 1);
    }

    #[test]
    fn boundary_starts_below_low() {
        let steps = generate_quick_sort_steps(&[4, 1, 3], PivotStrategy::Last);
        let partition = steps
            .iter()
            .find(|s| s.kind == QuickStepKind::Partition && !s.highlight.is_empty())
            .unwrap();
        assert_eq!(partition.boundary, -1);
    }

    #[test]
    fn seeded_random_pivots_are_reproducible() {
        let input = [9, 4, 7, 1, 8, 2, 6];
        let a = generate_quick_sort_steps_with_rng(
            &input,
            PivotStrategy::Random,
            &mut ChaCha8Rng::seed_from_u64(11),
        );
        let b = generate_quick_sort_steps_with_rng(
            &input,
            PivotStrategy::Random,
            &mut ChaCha8Rng::seed_from_u64(11),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn sorted_input_does_not_recurse_deeply() {
        // Worst case for the last pivot: every range peels off one element.
        let n = 200;
        let input: Vec<i64> = (0..n as i64).collect();
        let steps = generate_quick_sort_steps(&input, PivotStrategy::Last);
        assert_eq!(steps.last().unwrap().array, input);
        // A range of m >= 2 costs m + 2 steps; add start, final singleton, end.
        let expected: usize = (2..=n).map(|m| m + 2).sum::<usize>() + 3;
        assert_eq!(steps.len(), expected);
    }

    #[test]
    fn empty_and_singleton() {
        let empty = generate_quick_sort_steps(&[], PivotStrategy::Median);
        assert_eq!(empty.len(), 2);
        let single = generate_quick_sort_steps(&[7], PivotStrategy::Median);
        assert_eq!(single.len(), 3);
        assert_eq!(single[1].kind, QuickStepKind::Sorted);
    }
}
