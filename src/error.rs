//! Error types for lilr

use thiserror::Error;

/// Result type alias using lilr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lilr operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape mismatch between two storages
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Rank mismatch for an operation that requires a specific rank
    #[error("Rank mismatch: expected rank {expected}, got {got}")]
    RankMismatch {
        /// Required rank
        expected: usize,
        /// Actual rank
        got: usize,
    },

    /// Coordinate out of bounds along one axis
    #[error("Index {index} out of bounds for axis {axis} of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// The axis the index applies to
        axis: usize,
        /// Size of the axis
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
