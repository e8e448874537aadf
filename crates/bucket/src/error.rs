//! Error types for bucket operations.

use thiserror::Error;

/// Result type for bucket operations.
pub type Result<T> = std::result::Result<T, BucketError>;

/// Errors that can occur while extracting from a pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BucketError {
    /// Extraction attempted on a pool with no items left.
    #[error("the bucket does not have any items")]
    EmptyPool,
}
