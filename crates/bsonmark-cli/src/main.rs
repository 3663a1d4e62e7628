//! Command line driver for the bsonmark benchmark
//!
//! Picks an encoder from the positional mode token, times it for the
//! configured number of runs, and writes the report to stdout. Without a
//! recognized token it prints a one-line usage hint and exits
//! successfully, running nothing.

use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bsonmark_core::{BenchConfig, Mode, config, run_benchmark};

/// Times alternative BSON document construction strategies
#[derive(Parser, Debug)]
#[command(name = "bsonmark", version)]
struct Cli {
    /// Benchmark mode: `raw` appends fields one at a time into a raw
    /// document buffer; `document` materializes an ordered document and
    /// encodes it in one pass
    mode: Option<String>,

    /// Number of timed runs
    #[arg(long, default_value_t = config::DEFAULT_RUNS)]
    runs: u32,

    /// Number of integer fields per constructed document
    #[arg(long, default_value_t = config::DEFAULT_FIELDS)]
    fields: u32,
}

fn main() -> bsonmark_core::Result<()> {
    // Diagnostics go to stderr; stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(mode) = cli.mode.as_deref().and_then(Mode::from_token) else {
        println!("Specify raw or document");
        return Ok(());
    };

    let bench_config = BenchConfig::new(cli.runs, cli.fields)?;
    info!(%mode, runs = bench_config.runs, fields = bench_config.fields, "starting benchmark");

    let encoder = mode.encoder();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_benchmark(encoder.as_ref(), &bench_config, &mut out)?;
    out.flush()?;

    Ok(())
}
