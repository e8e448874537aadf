//! Error types for prize strategies.

use thiserror::Error;

/// Result type for prize strategy operations.
pub type Result<T> = std::result::Result<T, PrizeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrizeError {
    /// Rejected at strategy construction.
    #[error("invalid prize configuration: {0}")]
    InvalidConfig(String),

    /// Rejected at prize computation.
    #[error("invalid prize argument: {0}")]
    InvalidArgument(String),
}
