//! The prize strategy trait.

use types::Money;

use crate::error::Result;

/// Maps (pot, winner rank) to a prize amount.
///
/// `rank` is 0-based: rank 0 is the winner of the first ball drawn.
///
/// # Returns
/// - `Ok(Some(amount))` for a computed prize (possibly zero)
/// - `Ok(None)` when the policy has no answer for this rank; callers
///   display it as zero
///
/// # Errors
/// `PrizeError::InvalidArgument` for a negative pot.
pub trait PrizeStrategy: Send + Sync {
    fn prize_amount(&self, pot: Money, rank: usize) -> Result<Option<Money>>;

    /// Short human-readable description of the policy.
    fn name(&self) -> &str {
        "custom"
    }
}
