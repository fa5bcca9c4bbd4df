//! Per-component duration statistics
//!
//! Samples are canonical seconds, grouped by component name. Statistics are
//! computed once, after all input has been consumed.

use std::collections::HashMap;

/// Summary statistics for a single component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSummary {
    /// Number of samples recorded for this component
    pub count: usize,
    /// Smallest sample, seconds
    pub min: f64,
    /// Largest sample, seconds
    pub max: f64,
    /// P50, seconds
    pub median: f64,
    /// P95, seconds
    pub p95: f64,
}

/// Tracks duration samples for all components
#[derive(Debug, Default)]
pub struct StatsTracker {
    /// Map from component name to samples in arrival order (seconds)
    samples: HashMap<String, Vec<f64>>,
    /// Component names in first-observed order
    order: Vec<String>,
}

/// Percentile of a sorted sample set via linear interpolation between the
/// two closest ranks: rank = p/100 × (n−1), then interpolate between the
/// values at the floor and ceil of that rank.
///
/// At p = 50 this coincides with the classic median for both odd and even
/// sample counts.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

impl StatsTracker {
    /// Create a new statistics tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample (seconds) for a component. The component's group
    /// is created on first observation.
    pub fn record(&mut self, component: &str, seconds: f64) {
        if !self.samples.contains_key(component) {
            self.order.push(component.to_string());
        }
        self.samples
            .entry(component.to_string())
            .or_default()
            .push(seconds);
    }

    /// True if no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct components observed
    pub fn component_count(&self) -> usize {
        self.order.len()
    }

    /// Compute summaries for every component, in first-observed order.
    pub fn summaries(&self) -> Vec<(String, ComponentSummary)> {
        self.order
            .iter()
            .map(|name| {
                // Groups exist only once a sample has been recorded, so the
                // lookup cannot miss and the sample list is non-empty.
                let samples = &self.samples[name];
                (name.clone(), Self::summarize(samples))
            })
            .collect()
    }

    /// Summarize one non-empty sample list
    fn summarize(samples: &[f64]) -> ComponentSummary {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        ComponentSummary {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: percentile(&sorted, 50.0),
            p95: percentile(&sorted, 95.0),
        }
    }
}
