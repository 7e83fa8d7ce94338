//! Insertion sort tracer.

use algotrace_core::step::{format_values, InsertionSortStep, InsertionStepKind, SortedIndices};

/// Per-iteration context shared by every step of one outer iteration.
struct Recorder {
    steps: Vec<InsertionSortStep>,
    sorted: SortedIndices,
    current: usize,
    key: Option<i64>,
}

impl Recorder {
    fn push(
        &mut self,
        kind: InsertionStepKind,
        arr: &[i64],
        comparing_index: usize,
        highlight: Vec<usize>,
        description: String,
    ) {
        self.steps.push(InsertionSortStep {
            kind,
            array: arr.to_vec(),
            current_index: self.current,
            key: self.key,
            comparing_index,
            highlight,
            sorted_indices: self.sorted.clone(),
            description,
        });
    }
}

/// Traces insertion sort over a copy of `array`.
///
/// For each `i >= 1` the key `arr[i]` is selected, every larger element of the
/// prefix is compared and shifted one slot right, the key is inserted, and a
/// `Sorted` step marks the prefix `[0..=i]` ordered.
pub fn generate_insertion_sort_steps(array: &[i64]) -> Vec<InsertionSortStep> {
    let mut arr = array.to_vec();
    let n = arr.len();
    let mut rec = Recorder {
        steps: Vec::new(),
        sorted: SortedIndices::new(),
        current: 0,
        key: arr.first().copied(),
    };

    // A one-element prefix is trivially ordered.
    if n > 0 {
        rec.sorted.insert(0);
    }
    rec.push(
        InsertionStepKind::Sorted,
        &arr,
        0,
        if n > 0 { vec![0] } else { Vec::new() },
        format!(
            "Starting insertion sort with {}. The first element is already ordered.",
            format_values(&arr)
        ),
    );

    for i in 1..n {
        let key = arr[i];
        rec.current = i;
        rec.key = Some(key);

        rec.push(
            InsertionStepKind::Select,
            &arr,
            i,
            vec![i],
            format!("Selecting {} at index {} to insert into the ordered prefix", key, i),
        );

        // `slot` is where the key will land; arr[slot - 1] is the next candidate.
        let mut slot = i;
        while slot > 0 && arr[slot - 1] > key {
            let j = slot - 1;
            rec.push(
                InsertionStepKind::Compare,
                &arr,
                j,
                vec![j, j + 1],
                format!("{} > {}: shifting {} to the right", arr[j], key, arr[j]),
            );

            arr[j + 1] = arr[j];
            rec.push(
                InsertionStepKind::Shift,
                &arr,
                j,
                vec![j, j + 1],
                format!("Moved {} from index {} to {}", arr[j], j, j + 1),
            );
            slot = j;
        }

        if slot > 0 {
            let j = slot - 1;
            rec.push(
                InsertionStepKind::Compare,
                &arr,
                j,
                vec![j, j + 1],
                format!("{} <= {}: found the insertion point", arr[j], key),
            );
        }

        arr[slot] = key;
        rec.push(
            InsertionStepKind::Insert,
            &arr,
            slot,
            vec![slot],
            format!("Inserting {} at index {}", key, slot),
        );

        rec.sorted.insert(i);
        rec.push(
            InsertionStepKind::Sorted,
            &arr,
            slot,
            Vec::new(),
            format!("The first {} elements are now ordered", i + 1),
        );
    }

    rec.sorted.extend(0..n);
    rec.current = n.saturating_sub(1);
    rec.key = arr.last().copied();
    rec.push(
        InsertionStepKind::Sorted,
        &arr,
        n.saturating_sub(1),
        Vec::new(),
        "Array fully sorted".to_string(),
    );

    tracing::debug!(algorithm = "insertion-sort", len = n, steps = rec.steps.len(), "generated trace");
    rec.steps
}
