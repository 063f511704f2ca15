//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A durable-storage read or write error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Checkout was invoked with an empty cart.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// Order processing failed or timed out before commit.
    #[error("order processing failed: {0}")]
    Processing(String),
}
