//! LSD radix sort tracer, base [`RADIX`].
//!
//! Digits are taken from each value's magnitude, least significant first.
//! When the input holds negative values a final sign pass moves them, in
//! reverse magnitude order, ahead of the non-negative ones.

use algotrace_core::step::distribution::RADIX;
use algotrace_core::step::{format_values, RadixSortStep, RadixStepKind};

struct Recorder {
    steps: Vec<RadixSortStep>,
    max_digits: usize,
}

impl Recorder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        kind: RadixStepKind,
        arr: &[i64],
        buckets: &[Vec<i64>],
        digit: usize,
        index: Option<usize>,
        bucket: Option<usize>,
        description: String,
    ) {
        self.steps.push(RadixSortStep {
            kind,
            array: arr.to_vec(),
            buckets: buckets.to_vec(),
            current_digit: digit,
            current_index: index,
            current_value: index.map(|i| arr[i]),
            max_digits: self.max_digits,
            highlight_array: index.into_iter().collect(),
            highlight_bucket: bucket,
            description,
        });
    }
}

/// Decimal digits of the largest magnitude in `values`; at least 1.
fn digit_count(values: &[i64]) -> usize {
    match values.iter().map(|v| v.unsigned_abs()).max() {
        Some(m) if m > 0 => m.ilog10() as usize + 1,
        _ => 1,
    }
}

/// Digit `position` (0 = ones) of `value`'s magnitude.
fn digit_of(value: i64, position: usize) -> usize {
    let divisor = (RADIX as u64).pow(position as u32);
    ((value.unsigned_abs() / divisor) % RADIX as u64) as usize
}

fn ordinal(position: usize) -> String {
    match position {
        0 => "ones".to_string(),
        1 => "tens".to_string(),
        2 => "hundreds".to_string(),
        p => format!("10^{}", p),
    }
}

/// Traces LSD radix sort over a copy of `array`. Empty input yields an empty
/// trace.
pub fn generate_radix_sort_steps(array: &[i64]) -> Vec<RadixSortStep> {
    if array.is_empty() {
        return Vec::new();
    }
    let mut arr = array.to_vec();
    let n = arr.len();
    let mut rec = Recorder {
        steps: Vec::new(),
        max_digits: digit_count(&arr),
    };
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); RADIX];

    rec.push(
        RadixStepKind::Distribute,
        &arr,
        &buckets,
        0,
        None,
        None,
        format!(
            "Starting radix sort on {}: {} digit pass(es)",
            format_values(&arr),
            rec.max_digits
        ),
    );

    for digit in 0..rec.max_digits {
        let place = ordinal(digit);
        rec.push(
            RadixStepKind::Distribute,
            &arr,
            &buckets,
            digit,
            None,
            None,
            format!("Distributing by the {} digit", place),
        );
        for i in 0..n {
            let value = arr[i];
            let b = digit_of(value, digit);
            buckets[b].push(value);
            rec.push(
                RadixStepKind::Distribute,
                &arr,
                &buckets,
                digit,
                Some(i),
                Some(b),
                format!("{} has {} digit {}: bucket {}", value, place, b, b),
            );
        }

        rec.push(
            RadixStepKind::Collect,
            &arr,
            &buckets,
            digit,
            None,
            None,
            "Collecting buckets 0 through 9 in order".to_string(),
        );
        let mut write = 0;
        for b in 0..RADIX {
            let drained = std::mem::take(&mut buckets[b]);
            for (k, &value) in drained.iter().enumerate() {
                arr[write] = value;
                buckets[b] = drained[k + 1..].to_vec();
                rec.push(
                    RadixStepKind::Collect,
                    &arr,
                    &buckets,
                    digit,
                    Some(write),
                    Some(b),
                    format!("Writing {} from bucket {} to index {}", value, b, write),
                );
                write += 1;
            }
        }
        rec.push(
            RadixStepKind::Collect,
            &arr,
            &buckets,
            digit,
            None,
            None,
            format!("After the {} pass: {}", place, format_values(&arr)),
        );
    }

    let last_digit = rec.max_digits - 1;
    if arr.iter().any(|&v| v < 0) {
        let (negative, rest): (Vec<i64>, Vec<i64>) = arr.iter().partition(|&&v| v < 0);
        arr = negative.into_iter().rev().chain(rest).collect();
        rec.push(
            RadixStepKind::Collect,
            &arr,
            &buckets,
            last_digit,
            None,
            None,
            format!("Moving negative values to the front: {}", format_values(&arr)),
        );
    }

    rec.push(
        RadixStepKind::Complete,
        &arr,
        &buckets,
        last_digit,
        None,
        None,
        format!("Radix sort complete: {}", format_values(&arr)),
    );

    tracing::debug!(
        algorithm = "radix-sort",
        len = n,
        digits = rec.max_digits,
        steps = rec.steps.len(),
        "generated trace"
    );
    rec.steps
}
