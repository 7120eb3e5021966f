//! # Store Errors
//!
//! Error types for the recipe store adapter.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures crossing the boundary to the key-value store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The scan, put, or delete call itself failed
    #[error("{0}")]
    Transport(String),

    /// A stored item does not match the recipe shape
    #[error("item {id:?} has an invalid shape: {reason}")]
    Decode { id: String, reason: String },
}

impl StoreError {
    /// Transport-level failure with the SDK's rendering of the cause.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        StoreError::Transport(err.to_string())
    }

    /// Shape mismatch while decoding a stored item.
    pub fn decode(id: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Decode {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
