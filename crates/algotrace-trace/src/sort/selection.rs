//! Selection sort tracer.

use algotrace_core::step::{format_values, SelectionSortStep, SelectionStepKind, SortedIndices};

struct Recorder {
    steps: Vec<SelectionSortStep>,
    sorted: SortedIndices,
}

impl Recorder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        kind: SelectionStepKind,
        arr: &[i64],
        current_index: usize,
        min_index: usize,
        comparing_index: usize,
        highlight: Vec<usize>,
        description: String,
    ) {
        self.steps.push(SelectionSortStep {
            kind,
            array: arr.to_vec(),
            current_index,
            min_index,
            comparing_index,
            highlight,
            sorted_indices: self.sorted.clone(),
            description,
        });
    }
}

/// Traces selection sort over a copy of `array`.
///
/// For each position `i` the unsorted suffix is scanned for its minimum
/// (`Compare` per candidate, `Select` on each improvement), the minimum is
/// swapped into `i` (a no-op `Swap` step when it is already there), and `i`
/// is marked sorted. The last position is marked once the scans finish.
pub fn generate_selection_sort_steps(array: &[i64]) -> Vec<SelectionSortStep> {
    let mut arr = array.to_vec();
    let n = arr.len();
    let mut rec = Recorder {
        steps: Vec::new(),
        sorted: SortedIndices::new(),
    };

    rec.push(
        SelectionStepKind::Select,
        &arr,
        0,
        0,
        0,
        Vec::new(),
        format!("Starting selection sort with {}", format_values(&arr)),
    );

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        rec.push(
            SelectionStepKind::Select,
            &arr,
            i,
            i,
            i,
            vec![i],
            format!("Searching for the smallest element from index {}", i),
        );

        for j in i + 1..n {
            rec.push(
                SelectionStepKind::Compare,
                &arr,
                i,
                min_index,
                j,
                vec![i, min_index, j],
                format!("Comparing {} with current minimum {}", arr[j], arr[min_index]),
            );

            if arr[j] < arr[min_index] {
                min_index = j;
                rec.push(
                    SelectionStepKind::Select,
                    &arr,
                    i,
                    min_index,
                    j,
                    vec![i, min_index],
                    format!("New minimum {} at index {}", arr[min_index], min_index),
                );
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
            rec.push(
                SelectionStepKind::Swap,
                &arr,
                i,
                min_index,
                i,
                vec![i, min_index],
                format!(
                    "Swapping {} (index {}) with {} (index {})",
                    arr[i], i, arr[min_index], min_index
                ),
            );
        } else {
            rec.push(
                SelectionStepKind::Swap,
                &arr,
                i,
                min_index,
                i,
                vec![i],
                format!("{} is already in place", arr[i]),
            );
        }

        rec.sorted.insert(i);
        rec.push(
            SelectionStepKind::Sorted,
            &arr,
            i,
            i,
            i,
            vec![i],
            format!("Index {} holds its final value {}", i, arr[i]),
        );
    }

    if n > 0 {
        let last = n - 1;
        rec.sorted.insert(last);
        rec.push(
            SelectionStepKind::Sorted,
            &arr,
            last,
            last,
            last,
            vec![last],
            format!("The last element {} is already in place", arr[last]),
        );
    }

    rec.push(
        SelectionStepKind::Sorted,
        &arr,
        0,
        0,
        0,
        Vec::new(),
        "Array fully sorted".to_string(),
    );

    tracing::debug!(algorithm = "selection-sort", len = n, steps = rec.steps.len(), "generated trace");
    rec.steps
}
