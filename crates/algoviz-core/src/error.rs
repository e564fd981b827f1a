//! Error types shared by every algoviz crate.

use thiserror::Error;

use crate::geom::Point;

/// Result type for algoviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported to the driver. None of them are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input sequence is unusable (too short, or a token is not a number).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A pathfinding run was requested before the grid was ready.
    #[error("precondition unmet: {0}")]
    PreconditionUnmet(&'static str),

    /// A run was requested while another run is still active.
    #[error("another run is already in progress")]
    ConcurrentRunRejected,

    /// The grid or the value sequence was edited while a run is active.
    #[error("cannot modify state while a run is in progress")]
    RunInProgress,

    /// The run was cancelled at a step boundary.
    #[error("run cancelled")]
    Cancelled,

    /// No algorithm goes by this name.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A grid coordinate outside the grid.
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
