//! Linear search tracer: one probe step per element, left to right.

use algotrace_core::step::{format_values, Comparison, LinearSearchStep, SearchStepKind};

/// Traces a left-to-right scan of `array` for `target`.
///
/// The trace is a start step, one step per element examined, and then either
/// a `Found` step (replacing the probe of the matching element) or a final
/// `NotFound` step.
pub fn generate_linear_search_steps(array: &[i64], target: i64) -> Vec<LinearSearchStep> {
    let mut steps = Vec::with_capacity(array.len() + 2);

    steps.push(LinearSearchStep {
        kind: SearchStepKind::Start,
        current_index: None,
        target,
        found: false,
        comparison: None,
        comparisons: 0,
        description: format!(
            "Starting linear search over {} for {}. Each element is checked from left to right.",
            format_values(array),
            target
        ),
    });

    let mut found = false;
    for (i, &value) in array.iter().enumerate() {
        if value == target {
            steps.push(LinearSearchStep {
                kind: SearchStepKind::Found,
                current_index: Some(i),
                target,
                found: true,
                comparison: Some(Comparison::Equal),
                comparisons: i + 1,
                description: format!(
                    "Found! Element {} at index {} equals {}. Total comparisons: {}.",
                    value,
                    i,
                    target,
                    i + 1
                ),
            });
            found = true;
            break;
        }

        steps.push(LinearSearchStep {
            kind: SearchStepKind::Probe,
            current_index: Some(i),
            target,
            found: false,
            comparison: Some(Comparison::NotEqual),
            comparisons: i + 1,
            description: format!("Index {}: {} ≠ {}. Moving to the next element.", i, value, target),
        });
    }

    if !found {
        steps.push(LinearSearchStep {
            kind: SearchStepKind::NotFound,
            current_index: None,
            target,
            found: false,
            comparison: None,
            comparisons: array.len(),
            description: format!(
                "{} is not in the array. All {} elements were checked.",
                target,
                array.len()
            ),
        });
    }

    tracing::debug!(
        algorithm = "linear-search",
        len = array.len(),
        steps = steps.len(),
        found,
        "generated trace"
    );
    steps
}
