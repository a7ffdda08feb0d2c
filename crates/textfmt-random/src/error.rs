//! Error types for the random helpers.

use thiserror::Error;

/// Errors raised by the random helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// An argument is outside the domain the helper accepts.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Result alias for the random helpers.
pub type Result<T> = std::result::Result<T, RandomError>;
