//! Error types for the local store.

use thiserror::Error;

/// Errors surfaced by [`LocalStore`](super::LocalStore) implementations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The requested dish is not cached.
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    /// The store actor is no longer running.
    #[error("Store closed")]
    Closed,

    /// The store actor dropped the response channel.
    #[error("Store dropped response channel")]
    Dropped,

    /// Backend-specific failure.
    #[error("Store backend error: {0}")]
    Backend(String),
}
