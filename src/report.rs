//! Text rendering of per-component statistics blocks

use crate::stats::StatsTracker;
use std::fmt::Write;

/// Render every component block, in first-observed order.
///
/// One block per component: the name with a trailing colon, then indented
/// Min/Max/Median/P95 lines in seconds with 9 decimal digits, then a blank
/// separator line.
pub fn render(tracker: &StatsTracker) -> String {
    let mut output = String::new();

    for (name, summary) in tracker.summaries() {
        // String formatting cannot fail; the Write result is an artifact
        // of the trait signature.
        let _ = writeln!(output, "{}:", name);
        let _ = writeln!(output, "  Min: {:.9} s", summary.min);
        let _ = writeln!(output, "  Max: {:.9} s", summary.max);
        let _ = writeln!(output, "  Median: {:.9} s", summary.median);
        let _ = writeln!(output, "  P95: {:.9} s", summary.p95);
        output.push('\n');
    }

    output
}
