//! Error types for breadcrumb trails.

use thiserror::Error;

/// Errors that can occur when building or reading a trail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreadError {
    /// An argument was rejected, e.g. an empty sequence of crumbs.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Index past the end of the trail.
    #[error("Index {index} out of bounds for trail of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl BreadError {
    /// Create the error returned when a trail would have no crumbs.
    pub fn empty_trail() -> Self {
        Self::InvalidArgument {
            message: "a trail needs at least one crumb".to_string(),
        }
    }

    /// Create an out-of-bounds error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

/// Result type for trail operations.
pub type Result<T, E = BreadError> = std::result::Result<T, E>;
