//! CLI argument parsing for durstat

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-component blocks (default)
    Text,
    /// JSON array for machine parsing
    Json,
    /// CSV for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "durstat")]
#[command(version)]
#[command(
    about = "Aggregate component:duration log lines into per-component latency statistics",
    long_about = None
)]
pub struct Cli {
    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,

    /// Read samples from FILE instead of standard input
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}
