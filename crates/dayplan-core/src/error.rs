//! Core error types for dayplan-core.
//!
//! The engine favors defensive defaulting over raising errors: malformed
//! numeric inputs are clamped, missing dates mean "no constraint." The one
//! genuine failure category is an invalid reorder request, which must be
//! rejected without producing any partial result.

use thiserror::Error;

/// Core error type for dayplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reorder request errors
    #[error("Reorder error: {0}")]
    Reorder(#[from] ReorderError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from manual reorder requests.
///
/// Any of these means the request was rejected as a whole: callers must
/// treat the result as "no change," and the engine guarantees it produced
/// no partially-mutated order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// The moved task is not present in the supplied order snapshot
    #[error("Task '{id}' not found in the current order")]
    TaskNotFound { id: String },

    /// The target index falls outside the column
    #[error("Target index {index} out of bounds for column of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The supplied order contains the same task twice
    #[error("Task '{id}' appears more than once in the current order")]
    DuplicateTask { id: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
