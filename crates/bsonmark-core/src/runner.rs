//! The timed benchmark loop and its report
//!
//! The report format is the whole external contract: one
//! `<label> <seconds>` line per run, a separator of five equals signs,
//! then `Average: <mean>`. Diagnostics go through `tracing` so they can
//! never interleave with the report.

use std::io::Write;

use tracing::debug;

use crate::config::BenchConfig;
use crate::encoder::BsonEncoder;
use crate::error::Result;
use crate::timer::time_call;

/// Column the run labels are right-aligned to, wide enough for both
/// encoder labels
const LABEL_WIDTH: usize = 14;

/// Separator between the per-run lines and the average
const SEPARATOR: &str = "=====";

/// Time `config.runs` document constructions with `encoder`, writing the
/// report to `out`
///
/// Each constructed buffer is dropped after its run is timed; only the
/// durations survive the loop. Returns the arithmetic mean of the
/// per-run durations in seconds. An encoding or write failure aborts
/// the loop and propagates.
pub fn run_benchmark(
    encoder: &dyn BsonEncoder,
    config: &BenchConfig,
    out: &mut impl Write,
) -> Result<f64> {
    config.validate()?;

    let mut total = 0.0_f64;
    for run in 0..config.runs {
        let (outcome, seconds) = time_call(|| encoder.encode(config.fields));
        let encoded = outcome?;
        debug!(run, seconds, bytes = encoded.len(), "timed run complete");
        writeln!(
            out,
            "{label:>width$} {seconds}",
            label = encoder.label(),
            width = LABEL_WIDTH
        )?;
        total += seconds;
    }

    let mean = total / f64::from(config.runs);
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Average: {mean}")?;
    Ok(mean)
}
