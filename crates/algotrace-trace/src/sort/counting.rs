//! Counting sort tracer with a value offset for negative inputs.
//!
//! Three traced phases over `count_array` (indexed by `value - min_value`):
//! tally, prefix sums, then a right-to-left placement walk. Walking the input
//! backwards is what keeps equal values in their original relative order.

use algotrace_core::step::{format_values, CountingSortStep, CountingStepKind};

use crate::error::{TraceError, MAX_COUNT_RANGE};

struct Recorder<'a> {
    input: &'a [i64],
    min: i64,
    max: i64,
    steps: Vec<CountingSortStep>,
}

/// Highlight and cursor fields of one counting-sort step.
#[derive(Default)]
struct Focus {
    index: Option<usize>,
    input: Vec<usize>,
    count: Vec<usize>,
    output: Vec<usize>,
}

impl Recorder<'_> {
    fn push(
        &mut self,
        kind: CountingStepKind,
        count: &[usize],
        output: &[Option<i64>],
        focus: Focus,
        description: String,
    ) {
        self.steps.push(CountingSortStep {
            kind,
            input_array: self.input.to_vec(),
            count_array: count.to_vec(),
            output_array: output.to_vec(),
            current_index: focus.index,
            current_value: focus.index.map(|i| self.input[i]),
            min_value: self.min,
            max_value: self.max,
            highlight_input: focus.input,
            highlight_count: focus.count,
            highlight_output: focus.output,
            description,
        });
    }
}

/// Number of counters needed for `[min, max]`, or an error past
/// [`MAX_COUNT_RANGE`].
fn counter_len(min: i64, max: i64) -> Result<usize, TraceError> {
    let width = (max as i128 - min as i128 + 1) as u128;
    if width > MAX_COUNT_RANGE as u128 {
        return Err(TraceError::CountRangeTooLarge {
            min,
            max,
            limit: MAX_COUNT_RANGE,
        });
    }
    Ok(width as usize)
}

/// Slot of `value` in the count array. `value` must lie in `[min, max]`.
fn slot(value: i64, min: i64) -> usize {
    (value as i128 - min as i128) as usize
}

/// Traces counting sort over `array`.
///
/// Empty input yields an empty trace. Inputs whose value range is wider than
/// [`MAX_COUNT_RANGE`] are rejected before anything is allocated.
pub fn generate_counting_sort_steps(array: &[i64]) -> Result<Vec<CountingSortStep>, TraceError> {
    let (Some(&min), Some(&max)) = (array.iter().min(), array.iter().max()) else {
        return Ok(Vec::new());
    };
    let k = counter_len(min, max)?;
    let n = array.len();

    let mut rec = Recorder {
        input: array,
        min,
        max,
        steps: Vec::new(),
    };
    let mut count = vec![0usize; k];
    let mut output: Vec<Option<i64>> = vec![None; n];

    rec.push(
        CountingStepKind::Count,
        &count,
        &output,
        Focus::default(),
        format!(
            "Values range from {} to {}: creating {} counters for {}",
            min,
            max,
            k,
            format_values(array)
        ),
    );

    // Phase 1: tally.
    for (i, &value) in array.iter().enumerate() {
        let c = slot(value, min);
        count[c] += 1;
        rec.push(
            CountingStepKind::Count,
            &count,
            &output,
            Focus {
                index: Some(i),
                input: vec![i],
                count: vec![c],
                ..Focus::default()
            },
            format!("Counting {}: count[{}] is now {}", value, c, count[c]),
        );
    }

    // Phase 2: prefix sums give one-past-the-last position per value.
    rec.push(
        CountingStepKind::Accumulate,
        &count,
        &output,
        Focus::default(),
        "Accumulating counts into final positions".to_string(),
    );
    for c in 1..k {
        count[c] += count[c - 1];
        rec.push(
            CountingStepKind::Accumulate,
            &count,
            &output,
            Focus {
                count: vec![c - 1, c],
                ..Focus::default()
            },
            format!(
                "count[{}] += count[{}]: values up to {} end before position {}",
                c,
                c - 1,
                min + c as i64,
                count[c]
            ),
        );
    }

    // Phase 3: right-to-left placement.
    rec.push(
        CountingStepKind::Place,
        &count,
        &output,
        Focus::default(),
        "Placing elements from right to left to keep equal values in order".to_string(),
    );
    for i in (0..n).rev() {
        let value = array[i];
        let c = slot(value, min);
        let pos = count[c] - 1;
        output[pos] = Some(value);
        count[c] -= 1;
        rec.push(
            CountingStepKind::Place,
            &count,
            &output,
            Focus {
                index: Some(i),
                input: vec![i],
                count: vec![c],
                output: vec![pos],
            },
            format!("Placing {} from index {} at output position {}", value, i, pos),
        );
    }

    let sorted: Vec<i64> = output.iter().flatten().copied().collect();
    rec.push(
        CountingStepKind::Complete,
        &count,
        &output,
        Focus {
            output: (0..n).collect(),
            ..Focus::default()
        },
        format!("Counting sort complete: {}", format_values(&sorted)),
    );

    tracing::debug!(
        algorithm = "counting-sort",
        len = n,
        counters = k,
        steps = rec.steps.len(),
        "generated trace"
    );
    Ok(rec.steps)
}
