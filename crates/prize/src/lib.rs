//! Prize computation strategies.
//!
//! A [`PrizeStrategy`] turns the pot and a winner's rank (0 = first ball
//! drawn) into a prize amount. The lottery draw only depends on the trait;
//! the concrete policy is chosen at construction time.
//!
//! - [`PercentagesOfHalfPot`]: each rank wins a percentage of half the pot
//! - [`FlatPrizes`]: each rank wins a fixed amount
//! - [`WinnerTakesAll`]: the first rank wins the whole pot

mod error;
mod flat;
mod half_pot;
mod strategy;

pub use error::{PrizeError, Result};
pub use flat::{FlatPrizes, WinnerTakesAll};
pub use half_pot::PercentagesOfHalfPot;
pub use strategy::PrizeStrategy;
