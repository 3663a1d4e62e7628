//! bsonmark core - BSON construction benchmark primitives
//!
//! This crate holds everything the benchmark measures and how it measures
//! it: the two document construction strategies behind the [`BsonEncoder`]
//! trait, the wall-clock [`timer`], the [`BenchConfig`] loop bounds, and
//! the [`runner`] that times a strategy repeatedly and writes the report.
//!
//! The command line driver lives in the `bsonmark-cli` crate; criterion
//! comparisons live in `bsonmark-bench`.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod encoder;
pub mod error;
pub mod runner;
pub mod timer;

pub use config::BenchConfig;
pub use encoder::{BsonEncoder, Mode, OrderedDocumentEncoder, RawAppendEncoder};
pub use error::{Error, Result};
pub use runner::run_benchmark;
pub use timer::time_call;
