//! Store error types.

use thiserror::Error;

/// Errors returned by [`crate::store::Store`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No student matched the given ID.
    #[error("no student with ID {0}")]
    NotFound(String),
}
