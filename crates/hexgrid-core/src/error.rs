//! Error types for hexgrid-core.

use thiserror::Error;

/// Result type for hexgrid-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grid operations.
///
/// Every variant is a caller-contract violation. Searches that simply find
/// nothing report `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A real direction was required but `Direction::Incorrect` was given.
    #[error("{operation} is undefined for the INCORRECT direction")]
    IncorrectDirection {
        operation: &'static str,
    },

    /// The result would not fit in `i32` coordinates.
    #[error("{operation} leaves the coordinate range")]
    OutOfRange {
        operation: &'static str,
    },

    /// The enclosing-hexagon search was given no points.
    #[error("cannot enclose an empty point set")]
    EmptyPointSet,

    /// Text could not be read as a coordinate.
    #[error("invalid coordinate: {0:?}")]
    ParseCoord(String),

    /// Text could not be read as a direction name.
    #[error("invalid direction: {0:?}")]
    ParseDirection(String),
}
