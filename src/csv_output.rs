//! CSV output format for component statistics
//!
//! `--format csv` implementation, for spreadsheet analysis and machine
//! parsing. Values are seconds with the same 9-digit precision as the text
//! report.

use crate::stats::StatsTracker;
use std::fmt::Write;

/// Escape a CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Generate CSV output: a header row, then one row per component in
/// first-observed order.
pub fn to_csv(tracker: &StatsTracker) -> String {
    let mut output = String::from("component,samples,min_s,max_s,median_s,p95_s\n");

    for (name, summary) in tracker.summaries() {
        let _ = writeln!(
            output,
            "{},{},{:.9},{:.9},{:.9},{:.9}",
            escape_field(&name),
            summary.count,
            summary.min,
            summary.max,
            summary.median,
            summary.p95
        );
    }

    output
}
