//! Output rendering for traces and the catalog.

use algotrace_core::AlgorithmInfo;
use algotrace_trace::Trace;

use crate::config::OutputFormat;

/// Renders a whole trace. JSON output is the serialized [`Trace`]; text output
/// is a header line followed by one numbered description per step.
pub fn render_trace(trace: &Trace, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(trace),
        OutputFormat::Text => {
            let mut out = format!("{}: {} steps\n", trace.algorithm(), trace.len());
            for (i, description) in trace.descriptions().iter().enumerate() {
                out.push_str(&step_line(i, trace.len(), description));
                out.push('\n');
            }
            out
        }
    }
}

/// One played or listed step as `[ 3/12] description`.
pub fn step_line(index: usize, total: usize, description: &str) -> String {
    let width = total.to_string().len();
    format!("[{:>width$}/{}] {}", index + 1, total, description, width = width)
}

pub fn render_catalog<'a>(
    entries: impl IntoIterator<Item = &'a AlgorithmInfo>,
    format: OutputFormat,
) -> String {
    let entries: Vec<&AlgorithmInfo> = entries.into_iter().collect();
    match format {
        OutputFormat::Json => to_json(&entries),
        OutputFormat::Text => entries
            .iter()
            .map(|info| {
                format!(
                    "{:<15} {:<7} {:<13} time {:<18} space {:<9} {}",
                    info.id.as_str(),
                    info.category.to_string(),
                    format!("{:?}", info.difficulty).to_lowercase(),
                    info.time_complexity,
                    info.space_complexity,
                    if info.stable { "stable" } else { "unstable" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_values(values: &[i64], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&values),
        OutputFormat::Text => values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize output: {}\"}}", e))
}
