//! Fixed-point monetary types for the lottery.
//!
//! Money and percentages both use fixed-point arithmetic with 4 decimal
//! places. Pots only ever grow by whole ticket prices and prizes are a
//! percentage of a floored amount, so every value the lottery produces is
//! exact at this scale and never picks up binary floating-point drift.

use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Fixed-point scale for [`Money`].
/// 10,000 = 1.00, 15,000 = 1.50, 100 = 0.01
pub const MONEY_SCALE: i64 = 10_000;

/// Fixed-point scale for [`Percentage`].
/// 10,000 = 100%, 7,500 = 75%, 1 = 0.01%
pub const PERCENT_SCALE: i64 = 10_000;

/// Raw units per displayed cent.
const RAW_PER_CENT: i64 = MONEY_SCALE / 100;

/// Digits after the decimal point accepted by [`Money::from_str`].
const MONEY_DECIMALS: usize = 4;

// =============================================================================
// Money
// =============================================================================

/// Fixed-point money with 4 decimal places.
///
/// # Examples
/// - `Money(10_000)` = 1.00
/// - `Money(23_000)` = 2.30
/// - `Money(100)` = 0.01
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const ONE: Money = Money(MONEY_SCALE);
    pub const CENT: Money = Money(RAW_PER_CENT);

    /// Create Money from a whole number of currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Self(units * MONEY_SCALE)
    }

    /// Create Money from a whole number of cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * RAW_PER_CENT)
    }

    /// Create Money from a floating-point value, rounding to the nearest raw unit.
    #[inline]
    pub fn from_float(v: f64) -> Self {
        Self((v * MONEY_SCALE as f64).round() as i64)
    }

    /// Convert to floating-point. Display and tests only.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / MONEY_SCALE as f64
    }

    /// Raw internal value.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Half of this amount, floored at the raw scale.
    #[inline]
    pub fn halve(self) -> Self {
        Money(self.0.div_euclid(2))
    }

    /// Round down to a multiple of `step`.
    ///
    /// A non-positive `step` leaves the amount unchanged.
    #[inline]
    pub fn floor_to(self, step: Money) -> Self {
        if step.0 <= 0 {
            return self;
        }
        Money(self.0.div_euclid(step.0) * step.0)
    }

    /// Checked addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Money) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Whole cents, rounded half-to-even.
    pub fn to_cents(self) -> i64 {
        let quotient = self.0.div_euclid(RAW_PER_CENT);
        let remainder = self.0.rem_euclid(RAW_PER_CENT);
        match (remainder * 2).cmp(&RAW_PER_CENT) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal => quotient + (quotient & 1),
        }
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "Money({}{}.{:04})",
            sign,
            abs / MONEY_SCALE as u64,
            abs % MONEY_SCALE as u64
        )
    }
}

/// Two decimals, rounded half-to-even (`12.35`, `-0.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.to_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Mul<Percentage> for Money {
    type Output = Money;

    /// Apply a percentage, truncating toward zero at the money scale.
    fn mul(self, pct: Percentage) -> Money {
        let scaled = self.0 as i128 * pct.0 as i128 / PERCENT_SCALE as i128;
        Money(scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Errors produced when parsing a decimal money literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("empty money amount")]
    Empty,

    #[error("invalid money amount: {0:?}")]
    InvalidDigit(String),

    #[error("money amount {0:?} has more than 4 decimal places")]
    TooPrecise(String),

    #[error("money amount {0:?} is out of range")]
    Overflow(String),
}

/// Exact decimal parsing: `"200"`, `"10.5"`, `"-0.0001"`.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError::Empty);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(ParseMoneyError::InvalidDigit(s.to_string()));
        }
        if frac.len() > MONEY_DECIMALS {
            return Err(ParseMoneyError::TooPrecise(s.to_string()));
        }

        let overflow = || ParseMoneyError::Overflow(s.to_string());
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let frac_value: i64 = if frac.is_empty() {
            0
        } else {
            format!("{:0<width$}", frac, width = MONEY_DECIMALS)
                .parse()
                .map_err(|_| overflow())?
        };

        let raw = whole_value
            .checked_mul(MONEY_SCALE)
            .and_then(|v| v.checked_add(frac_value))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -raw } else { raw }))
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// Fixed-point fraction with 4 decimal places, `Percentage::ONE` being 100%.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    AddAssign,
    Sum,
    From,
    Into,
)]
pub struct Percentage(pub i64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const ONE: Percentage = Percentage(PERCENT_SCALE);

    /// Create from a fraction where `1.0` is 100%, rounding to the nearest raw unit.
    #[inline]
    pub fn from_fraction(v: f64) -> Self {
        Self((v * PERCENT_SCALE as f64).round() as i64)
    }

    #[inline]
    pub fn to_fraction(self) -> f64 {
        self.0 as f64 / PERCENT_SCALE as f64
    }

    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// True when between 0% and 100% inclusive.
    #[inline]
    pub fn is_unit_fraction(self) -> bool {
        (0..=PERCENT_SCALE).contains(&self.0)
    }
}

impl fmt::Debug for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Percentage({:.4})", self.to_fraction())
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.to_fraction() * 100.0)
    }
}
