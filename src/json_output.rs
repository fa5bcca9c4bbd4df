//! JSON output format for component statistics
//!
//! `--format json` implementation.

use crate::stats::StatsTracker;
use serde::{Deserialize, Serialize};

/// Statistics summary for a single component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComponentStats {
    /// Component name, as it appeared in the input
    pub component: String,
    /// Number of samples
    pub samples: usize,
    /// Smallest sample in seconds
    pub min_s: f64,
    /// Largest sample in seconds
    pub max_s: f64,
    /// Median (P50) in seconds
    pub median_s: f64,
    /// 95th percentile in seconds
    pub p95_s: f64,
}

/// Serialize all component summaries as a pretty-printed JSON array,
/// preserving first-observed order.
pub fn to_json(tracker: &StatsTracker) -> serde_json::Result<String> {
    let entries: Vec<JsonComponentStats> = tracker
        .summaries()
        .into_iter()
        .map(|(component, summary)| JsonComponentStats {
            component,
            samples: summary.count,
            min_s: summary.min,
            max_s: summary.max,
            median_s: summary.median,
            p95_s: summary.p95,
        })
        .collect();

    serde_json::to_string_pretty(&entries)
}
