use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the solvemaze library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Maze description file could not be located at the resolved path.
    #[error("maze file not found at {path}")]
    MazeFileNotFound { path: PathBuf },

    /// Raised when the search exhausts every branch without reaching the exit.
    #[error("no solution found from node {start}")]
    NoSolution { start: NodeId },

    /// Raised when the search descends further than the configured depth cap.
    #[error("search exceeded the maximum depth of {limit} steps")]
    DepthLimitExceeded { limit: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reason a single maze description line was rejected.
///
/// Line errors never abort a load; they are collected as diagnostics and the
/// offending line is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line did not split into exactly two whitespace-separated fields.
    #[error("expected 2 fields, found {found}")]
    FieldCount { found: usize },

    /// The source token did not start with a decimal node id.
    #[error("source '{token}' does not start with a node number")]
    MissingNodeId { token: String },

    /// The target token was neither `x`, `e`, nor a decimal node id.
    #[error("target '{token}' is not x, e, or a node number")]
    InvalidTarget { token: String },
}
