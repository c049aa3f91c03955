//! Carousel and index store errors.

use thiserror::Error;

/// Carousel construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// The window needs at least three distinct items.
    #[error("carousel needs at least {min} items, got {found}")]
    TooFewItems { found: usize, min: usize },

    /// Gesture tuning is out of range.
    #[error("invalid gesture config: {0}")]
    InvalidGesture(String),
}

/// Errors from the persisted index store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store is not available (e.g. storage disabled by the browser).
    #[error("store unavailable")]
    Unavailable,

    /// The store refused the operation.
    #[error("store error: {0}")]
    Backend(String),
}
