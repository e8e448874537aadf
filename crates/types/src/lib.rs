//! Core value types for the lottery.
//!
//! This crate provides the types shared by every other lottery crate:
//! fixed-point money, fixed-point percentages, and the newtype used for
//! ball and ticket numbers.

mod ids;
mod money;

pub use ids::BallNumber;
pub use money::{MONEY_SCALE, Money, PERCENT_SCALE, ParseMoneyError, Percentage};
