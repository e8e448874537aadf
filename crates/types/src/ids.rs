//! Identifier newtypes.

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number printed on a ball, and on the ticket that refers to it.
///
/// Tickets and balls share the same numbering: the ticket holding number
/// `n` wins if ball `n` is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Into,
)]
pub struct BallNumber(pub i64);

impl BallNumber {
    /// Raw numeric value.
    #[inline]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BallNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Allow `ball == 7` comparisons
impl PartialEq<i64> for BallNumber {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}
