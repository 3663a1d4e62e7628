//! Benchmark loop bounds
//!
//! The run count and field count are explicit, documented configuration
//! rather than literals buried in the loop, so a measurement stays
//! reproducible from the command line that produced it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of timed runs per invocation unless overridden.
pub const DEFAULT_RUNS: u32 = 30;

/// Number of integer fields appended to the document in each run.
pub const DEFAULT_FIELDS: u32 = 10_000;

/// Loop bounds for one benchmark invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// How many times the selected encoder is timed
    pub runs: u32,

    /// How many integer fields each constructed document carries
    pub fields: u32,
}

impl BenchConfig {
    /// Create a configuration, rejecting bounds the benchmark cannot honor
    pub fn new(runs: u32, fields: u32) -> Result<Self> {
        let config = Self { runs, fields };
        config.validate()?;
        Ok(config)
    }

    /// Check that the loop bounds are usable
    ///
    /// Field values are written as BSON int32, so the field count must
    /// stay within `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(Error::invalid_config("runs must be at least 1"));
        }
        if self.fields > i32::MAX as u32 {
            return Err(Error::invalid_config(format!(
                "fields must fit in an int32, got {}",
                self.fields
            )));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            fields: DEFAULT_FIELDS,
        }
    }
}
