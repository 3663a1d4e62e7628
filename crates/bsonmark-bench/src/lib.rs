//! bsonmark benchmarking suite
//!
//! Criterion comparisons of the two document construction strategies.
//! The CLI's own timing loop reports wall-clock runs; the benches here
//! add statistically grounded numbers for development work.

pub use bsonmark_core::{
    BenchConfig, BsonEncoder, Mode, OrderedDocumentEncoder, RawAppendEncoder,
};
