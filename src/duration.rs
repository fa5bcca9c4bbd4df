//! Duration field parsing for component:duration samples
//!
//! Accepts `<number><unit>` where the unit is one of `s`, `ms`, `µs`.
//! The parsed value is normalized to canonical seconds.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors for duration field parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationError {
    #[error("invalid duration format: {0:?} (expected <number><unit>, e.g. 100ms)")]
    InvalidFormat(String),

    #[error("unknown duration unit: {0:?} (expected s, ms or µs)")]
    UnknownUnit(String),
}

static DURATION_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Anchored pattern for `<number><unit>`. The number is a non-negative
/// decimal with at most one dot; the unit is a separate capture so an
/// unrecognized suffix can be reported by name. `µ` is a two-byte UTF-8
/// character; the regex crate matches it as a single char.
fn duration_pattern() -> &'static Regex {
    DURATION_PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+(?:\.[0-9]+)?)(µs|ms|s)$").expect("duration pattern is valid")
    })
}

/// Multiplier that converts a value in the given unit to seconds.
///
/// Kept separate from the regex so an unexpected suffix surfaces as
/// `UnknownUnit` instead of silently producing a wrong scale.
fn unit_scale(unit: &str) -> Result<f64, DurationError> {
    match unit {
        "s" => Ok(1.0),
        "ms" => Ok(0.001),
        "µs" => Ok(0.000_001),
        other => Err(DurationError::UnknownUnit(other.to_string())),
    }
}

/// Parse a duration field like `100ms` or `1.5s` into canonical seconds.
pub fn parse_duration(field: &str) -> Result<f64, DurationError> {
    let captures = duration_pattern()
        .captures(field)
        .ok_or_else(|| DurationError::InvalidFormat(field.to_string()))?;

    let number: f64 = captures[1]
        .parse()
        .map_err(|_| DurationError::InvalidFormat(field.to_string()))?;
    let scale = unit_scale(&captures[2])?;

    Ok(number * scale)
}
