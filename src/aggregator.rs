//! Input consumption for component:duration sample lines
//!
//! Reads a line stream to exhaustion and populates a [`StatsTracker`].
//! Malformed lines abort the run; there is no skip-and-continue, because a
//! bad line means the upstream pipeline is producing garbage and partial
//! statistics would be misleading.

use crate::duration::{parse_duration, DurationError};
use crate::stats::StatsTracker;
use anyhow::{Context, Result};
use std::io::BufRead;
use thiserror::Error;

/// Errors for a single sample line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected exactly one ':' separator, found {0}")]
    SeparatorCount(usize),

    #[error("empty component name")]
    EmptyComponent,

    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// Parse one input line into `(component, seconds)`.
///
/// Blank lines yield `Ok(None)`. Everything else must be
/// `component:duration` with exactly one `:`.
pub fn parse_line(line: &str) -> Result<Option<(&str, f64)>, LineError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let separators = line.matches(':').count();
    if separators != 1 {
        return Err(LineError::SeparatorCount(separators));
    }

    // Exactly one ':' was counted above, so the split cannot fail.
    let (component, duration_field) = line.split_once(':').unwrap_or((line, ""));
    if component.is_empty() {
        return Err(LineError::EmptyComponent);
    }

    let seconds = parse_duration(duration_field)?;
    Ok(Some((component, seconds)))
}

/// Consume a line stream to exhaustion, grouping samples by component.
///
/// The first malformed line fails the whole run, with the 1-based line
/// number and offending text attached to the error.
pub fn aggregate<R: BufRead>(reader: R) -> Result<StatsTracker> {
    let mut tracker = StatsTracker::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;

        let parsed = parse_line(&line)
            .with_context(|| format!("malformed input line {}: {:?}", index + 1, line))?;

        if let Some((component, seconds)) = parsed {
            tracing::debug!(component, seconds, line = index + 1, "recorded sample");
            tracker.record(component, seconds);
        }
    }

    Ok(tracker)
}
