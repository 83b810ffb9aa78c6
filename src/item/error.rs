//! Error types for item operations.

use thiserror::Error;

/// Error type for item collection operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid item path: {0}")]
    InvalidPath(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl ItemError {
    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        ItemError::NotFound(name.into())
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        ItemError::InvalidBody(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        ItemError::InvalidPath(msg.into())
    }
}
