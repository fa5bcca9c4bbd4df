use anyhow::{Context, Result};
use clap::Parser;
use durstat::cli::{Cli, OutputFormat};
use durstat::{aggregator, csv_output, json_output, report};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Open the sample source: a file when given, otherwise standard input.
fn open_input(path: Option<&std::path::Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let reader = open_input(args.input.as_deref())?;
    let tracker = aggregator::aggregate(reader)?;

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&tracker)),
        OutputFormat::Json => println!("{}", json_output::to_json(&tracker)?),
        OutputFormat::Csv => print!("{}", csv_output::to_csv(&tracker)),
    }

    Ok(())
}
