//! Error types for lottery draw operations.

use bucket::BucketError;
use prize::PrizeError;
use thiserror::Error;

/// Result type for lottery draw operations.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Errors surfaced by [`LotteryDraw`](crate::LotteryDraw).
///
/// Every variant is recoverable: the draw is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Construction parameters were rejected.
    #[error("{0}")]
    Initialization(String),

    /// The ticket or ball pool ran out of items.
    #[error(transparent)]
    Pool(#[from] BucketError),

    /// A purchase or draw was attempted after the draw happened.
    #[error("Lottery draw already happened")]
    AlreadyClosed,

    /// A report was requested before the draw happened.
    #[error("Lottery draw didn't happen yet")]
    NotYetDrawn,

    /// Adding the ticket price would overflow the pot.
    #[error("Pot amount overflow")]
    PotOverflow,

    /// The prize strategy rejected its input.
    #[error(transparent)]
    Prize(#[from] PrizeError),
}

impl DrawError {
    /// True when the failure is an exhausted pool.
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, DrawError::Pool(BucketError::EmptyPool))
    }
}
