//! Error types for the hexgrid command line.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Arguments did not match any command
    #[error("usage error: {0}")]
    Usage(String),

    /// An argument was not a whole number
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// An environment variable held an unsupported value
    #[error("invalid value {value:?} for {var}")]
    Config {
        var: &'static str,
        value: String,
    },

    /// Geometry operation failed
    #[error(transparent)]
    Geometry(#[from] hexgrid_core::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
