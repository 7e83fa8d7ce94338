//! Bubble sort tracer with early exit on a swap-free pass.

use algotrace_core::step::{format_values, BubbleSortStep, BubbleStepKind, SortedIndices};

struct Recorder {
    steps: Vec<BubbleSortStep>,
    sorted: SortedIndices,
}

impl Recorder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        kind: BubbleStepKind,
        arr: &[i64],
        pass: usize,
        current_index: usize,
        next_index: usize,
        highlight: Vec<usize>,
        description: String,
    ) {
        self.steps.push(BubbleSortStep {
            kind,
            array: arr.to_vec(),
            pass,
            current_index,
            next_index,
            highlight,
            sorted_indices: self.sorted.clone(),
            description,
        });
    }
}

/// Traces bubble sort over a copy of `array`.
///
/// Each pass emits a `Pass` step, a `Compare` step for every adjacent pair
/// (followed by a `Swap` or a second `Compare` noting no swap), and a `Sorted`
/// step fixing the pass boundary. A pass with no swaps emits a closing `Pass`
/// step and ends the sort.
pub fn generate_bubble_sort_steps(array: &[i64]) -> Vec<BubbleSortStep> {
    let mut arr = array.to_vec();
    let n = arr.len();
    let mut rec = Recorder {
        steps: Vec::new(),
        sorted: SortedIndices::new(),
    };

    rec.push(
        BubbleStepKind::Pass,
        &arr,
        0,
        0,
        1,
        Vec::new(),
        format!("Starting bubble sort with {}", format_values(&arr)),
    );

    for pass in 0..n.saturating_sub(1) {
        let number = pass + 1;
        let mut swapped = false;

        rec.push(
            BubbleStepKind::Pass,
            &arr,
            number,
            0,
            1,
            Vec::new(),
            format!("Starting pass {} of {}", number, n - 1),
        );

        for j in 0..n - pass - 1 {
            rec.push(
                BubbleStepKind::Compare,
                &arr,
                number,
                j,
                j + 1,
                vec![j, j + 1],
                format!("Comparing {} with {}", arr[j], arr[j + 1]),
            );

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                rec.push(
                    BubbleStepKind::Swap,
                    &arr,
                    number,
                    j,
                    j + 1,
                    vec![j, j + 1],
                    format!(
                        "Swapping {} and {} since {} > {}",
                        arr[j + 1],
                        arr[j],
                        arr[j + 1],
                        arr[j]
                    ),
                );
            } else {
                rec.push(
                    BubbleStepKind::Compare,
                    &arr,
                    number,
                    j,
                    j + 1,
                    vec![j, j + 1],
                    format!("No swap: {} <= {}", arr[j], arr[j + 1]),
                );
            }
        }

        let boundary = n - pass - 1;
        rec.sorted.insert(boundary);
        rec.push(
            BubbleStepKind::Sorted,
            &arr,
            number,
            boundary,
            boundary,
            vec![boundary],
            format!("{} reached its final position after pass {}", arr[boundary], number),
        );

        if !swapped {
            rec.push(
                BubbleStepKind::Pass,
                &arr,
                number,
                0,
                1,
                Vec::new(),
                format!("No swaps in pass {}: the array is sorted", number),
            );
            break;
        }
    }

    rec.sorted.extend(0..n);
    rec.push(
        BubbleStepKind::Sorted,
        &arr,
        0,
        0,
        0,
        Vec::new(),
        "Array fully sorted".to_string(),
    );

    tracing::debug!(algorithm = "bubble-sort", len = n, steps = rec.steps.len(), "generated trace");
    rec.steps
}
