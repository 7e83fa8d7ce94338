//! Binary search tracer.
//!
//! The input is copied and sorted ascending before searching, so arbitrary
//! input order is accepted. All bounds in the emitted steps index that sorted
//! copy.

use std::cmp::Ordering;

use algotrace_core::step::{format_values, BinarySearchStep, Comparison, SearchStepKind};

/// Lower mid of an inclusive range, `None` once the range is empty.
fn lower_mid(left: isize, right: isize) -> Option<usize> {
    if left > right {
        return None;
    }
    // left >= 0 always holds, so the floor division never goes negative.
    Some(((left + right) / 2) as usize)
}

/// Traces a bisection search for `target` in a sorted copy of `array`.
pub fn generate_binary_search_steps(array: &[i64], target: i64) -> Vec<BinarySearchStep> {
    let mut sorted = array.to_vec();
    sorted.sort_unstable();

    let mut steps = Vec::new();
    let mut left: isize = 0;
    let mut right: isize = sorted.len() as isize - 1;
    let mut comparisons = 0;

    steps.push(BinarySearchStep {
        kind: SearchStepKind::Start,
        sorted_array: sorted.clone(),
        left,
        right,
        mid: lower_mid(left, right),
        target,
        found: false,
        comparison: None,
        comparisons,
        description: format!(
            "Starting binary search. Sorted array: {}. Looking for {}.",
            format_values(&sorted),
            target
        ),
    });

    let mut found = false;
    while let Some(mid) = lower_mid(left, right) {
        let mid_value = sorted[mid];
        comparisons += 1;

        let (kind, comparison, description) = match mid_value.cmp(&target) {
            Ordering::Equal => (
                SearchStepKind::Found,
                Comparison::Equal,
                format!("Found! {} at index {} equals {}.", mid_value, mid, target),
            ),
            Ordering::Less => (
                SearchStepKind::Probe,
                Comparison::Less,
                format!(
                    "{} is less than {}. Discarding the left half and searching the right.",
                    mid_value, target
                ),
            ),
            Ordering::Greater => (
                SearchStepKind::Probe,
                Comparison::Greater,
                format!(
                    "{} is greater than {}. Discarding the right half and searching the left.",
                    mid_value, target
                ),
            ),
        };

        found = comparison == Comparison::Equal;
        steps.push(BinarySearchStep {
            kind,
            sorted_array: sorted.clone(),
            left,
            right,
            mid: Some(mid),
            target,
            found,
            comparison: Some(comparison),
            comparisons,
            description,
        });

        match comparison {
            Comparison::Equal => break,
            Comparison::Less => left = mid as isize + 1,
            _ => right = mid as isize - 1,
        }
    }

    if !found {
        steps.push(BinarySearchStep {
            kind: SearchStepKind::NotFound,
            sorted_array: sorted.clone(),
            left,
            right,
            mid: None,
            target,
            found: false,
            comparison: None,
            comparisons,
            description: format!("{} is not in the array. The search space is empty.", target),
        });
    }

    tracing::debug!(
        algorithm = "binary-search",
        len = array.len(),
        steps = steps.len(),
        found,
        "generated trace"
    );
    steps
}
