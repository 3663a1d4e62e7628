//! Error types for benchmark operations

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for benchmark operations
///
/// There are no retries or recovery paths anywhere in the harness: every
/// error propagates to the driver and terminates the process nonzero.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Rejected loop bounds
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// BSON serialization failure inside an encoder
    #[error("BSON encoding failed: {0}")]
    Encode(String),

    /// I/O error while writing the report
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an encoding error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode(message.into())
    }
}

impl From<bson::ser::Error> for Error {
    fn from(err: bson::ser::Error) -> Self {
        Error::Encode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
