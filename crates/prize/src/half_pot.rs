//! Percentages-of-half-pot prize policy.

use types::{Money, PERCENT_SCALE, Percentage};

/// Float noise allowed when scaling a fraction to raw percentage units.
const FRACTION_TOLERANCE: f64 = 1e-6;

use crate::error::{PrizeError, Result};
use crate::strategy::PrizeStrategy;

/// Each rank wins a percentage of half the pot.
///
/// The percentage at index `i` is the share of half the pot won by the
/// holder of the ball drawn at rank `i`. Ranks past the configured list win
/// nothing.
///
/// The halved pot is floored to a multiple of `floor_step` before the
/// percentage is applied. The default step is one whole currency unit.
///
/// # Example
/// With percentages `[0.75, 0.15, 0.10]` and a pot of 200:
/// - rank 0 → 75
/// - rank 1 → 15
/// - rank 2 → 10
/// - rank 3 → 0
#[derive(Debug, Clone)]
pub struct PercentagesOfHalfPot {
    percentages: Vec<Percentage>,
    floor_step: Money,
}

impl PercentagesOfHalfPot {
    /// Build from fractions in `[0, 1]` (`0.75` = 75%).
    ///
    /// # Errors
    /// `PrizeError::InvalidConfig` if a fraction is outside `[0, 1]`, has
    /// more than four decimal places, or the fractions sum to more than 1.
    pub fn new(fractions: &[f64]) -> Result<Self> {
        if let Some(bad) = fractions.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(PrizeError::InvalidConfig(format!(
                "prize percentage must be between 0 and 1, got {bad}"
            )));
        }
        // Fixed-point conversion must be exact for the sum check to hold
        if let Some(bad) = fractions.iter().find(|&&p| {
            let scaled = p * PERCENT_SCALE as f64;
            (scaled - scaled.round()).abs() > FRACTION_TOLERANCE
        }) {
            return Err(PrizeError::InvalidConfig(format!(
                "prize percentage must have at most 4 decimal places, got {bad}"
            )));
        }
        Self::from_percentages(fractions.iter().map(|&p| Percentage::from_fraction(p)).collect())
    }

    /// Build from fixed-point percentages.
    ///
    /// # Errors
    /// Same rules as [`new`](Self::new), checked exactly in fixed point.
    pub fn from_percentages(percentages: Vec<Percentage>) -> Result<Self> {
        if let Some(bad) = percentages.iter().find(|p| !p.is_unit_fraction()) {
            return Err(PrizeError::InvalidConfig(format!(
                "prize percentage must be between 0 and 1, got {bad}"
            )));
        }

        let total: Percentage = percentages.iter().copied().sum();
        if total > Percentage::ONE {
            return Err(PrizeError::InvalidConfig(format!(
                "prize percentages sum must not exceed 1, got {total}"
            )));
        }

        Ok(Self {
            percentages,
            floor_step: Money::ONE,
        })
    }

    /// Floor the halved pot to multiples of `step` instead of whole units.
    ///
    /// # Errors
    /// `PrizeError::InvalidConfig` if `step` is not positive.
    pub fn with_floor_step(mut self, step: Money) -> Result<Self> {
        if !step.is_positive() {
            return Err(PrizeError::InvalidConfig(format!(
                "floor step must be positive, got {step}"
            )));
        }
        self.floor_step = step;
        Ok(self)
    }

    pub fn percentages(&self) -> &[Percentage] {
        &self.percentages
    }

    pub fn floor_step(&self) -> Money {
        self.floor_step
    }
}

impl PrizeStrategy for PercentagesOfHalfPot {
    fn prize_amount(&self, pot: Money, rank: usize) -> Result<Option<Money>> {
        if pot.is_negative() {
            return Err(PrizeError::InvalidArgument(format!(
                "pot amount cannot be negative, got {pot}"
            )));
        }

        let Some(&share) = self.percentages.get(rank) else {
            return Ok(Some(Money::ZERO));
        };

        Ok(Some(pot.halve().floor_to(self.floor_step) * share))
    }

    fn name(&self) -> &str {
        "percentages of half pot"
    }
}
