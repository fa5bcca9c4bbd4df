//! Durstat - latency statistics aggregator for component:duration log lines
//!
//! This library provides the core functionality for parsing human-readable
//! duration samples, grouping them by component, and computing descriptive
//! statistics (min, max, median, p95) once the input is exhausted.

pub mod aggregator;
pub mod cli;
pub mod csv_output;
pub mod duration;
pub mod json_output;
pub mod report;
pub mod stats;
