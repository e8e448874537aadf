//! Fixed-amount prize policies.

use types::Money;

use crate::error::{PrizeError, Result};
use crate::strategy::PrizeStrategy;

fn reject_negative_pot(pot: Money) -> Result<()> {
    if pot.is_negative() {
        return Err(PrizeError::InvalidArgument(format!(
            "pot amount cannot be negative, got {pot}"
        )));
    }
    Ok(())
}

/// Each rank wins a fixed amount regardless of the pot.
///
/// Ranks past the configured list have no prize (`None`).
#[derive(Debug, Clone)]
pub struct FlatPrizes {
    amounts: Vec<Money>,
}

impl FlatPrizes {
    /// # Errors
    /// `PrizeError::InvalidConfig` if any amount is negative.
    pub fn new(amounts: Vec<Money>) -> Result<Self> {
        if let Some(bad) = amounts.iter().find(|a| a.is_negative()) {
            return Err(PrizeError::InvalidConfig(format!(
                "flat prize amount cannot be negative, got {bad}"
            )));
        }
        Ok(Self { amounts })
    }
}

impl PrizeStrategy for FlatPrizes {
    fn prize_amount(&self, pot: Money, rank: usize) -> Result<Option<Money>> {
        reject_negative_pot(pot)?;
        Ok(self.amounts.get(rank).copied())
    }

    fn name(&self) -> &str {
        "flat prizes"
    }
}

/// The first ball drawn wins the whole pot; later ranks win nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinnerTakesAll;

impl PrizeStrategy for WinnerTakesAll {
    fn prize_amount(&self, pot: Money, rank: usize) -> Result<Option<Money>> {
        reject_negative_pot(pot)?;
        Ok(Some(if rank == 0 { pot } else { Money::ZERO }))
    }

    fn name(&self) -> &str {
        "winner takes all"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_prizes_ignore_pot() {
        let s = FlatPrizes::new(vec![Money::from_units(50), Money::from_float(12.5)]).unwrap();
        assert_eq!(
            s.prize_amount(Money::from_units(1), 0),
            Ok(Some(Money::from_units(50)))
        );
        assert_eq!(
            s.prize_amount(Money::from_units(1_000), 1),
            Ok(Some(Money::from_float(12.5)))
        );
        assert_eq!(s.prize_amount(Money::from_units(1_000), 2), Ok(None));
    }

    #[test]
    fn test_flat_prizes_reject_negative_amounts() {
        assert!(matches!(
            FlatPrizes::new(vec![Money::from_units(-1)]),
            Err(PrizeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_winner_takes_all() {
        let pot = Money::from_units(230);
        assert_eq!(WinnerTakesAll.prize_amount(pot, 0), Ok(Some(pot)));
        assert_eq!(WinnerTakesAll.prize_amount(pot, 1), Ok(Some(Money::ZERO)));
        assert!(matches!(
            WinnerTakesAll.prize_amount(Money::from_units(-5), 0),
            Err(PrizeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_strategies_are_interchangeable() {
        let strategies: Vec<Box<dyn PrizeStrategy>> = vec![
            Box::new(WinnerTakesAll),
            Box::new(FlatPrizes::new(vec![Money::from_units(5)]).unwrap()),
        ];
        let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["winner takes all", "flat prizes"]);
    }
}
