//! Thread-safe handle over a single lottery draw.
//!
//! Every method takes the lock once, so read-then-write operations like
//! `purchase_ticket` and `draw` are atomic per instance. Two threads can
//! never be sold the same ticket or both run the draw.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use types::{BallNumber, Money};

use crate::error::Result;
use crate::lottery::{LotteryDraw, Winner};

/// Cloneable, lock-protected [`LotteryDraw`].
#[derive(Debug, Clone)]
pub struct SharedLotteryDraw {
    inner: Arc<Mutex<LotteryDraw>>,
}

impl SharedLotteryDraw {
    pub fn new(draw: LotteryDraw) -> Self {
        Self {
            inner: Arc::new(Mutex::new(draw)),
        }
    }

    pub fn purchase_ticket(&self, name: &str) -> Result<BallNumber> {
        self.inner.lock().purchase_ticket(name)
    }

    pub fn draw(&self) -> Result<()> {
        self.inner.lock().draw()
    }

    pub fn drawn_balls_report(&self) -> Result<String> {
        self.inner.lock().drawn_balls_report()
    }

    pub fn winners_report(&self) -> Result<String> {
        self.inner.lock().winners_report()
    }

    pub fn winners(&self) -> Result<Vec<Winner>> {
        self.inner.lock().winners()
    }

    pub fn remaining_balls(&self) -> usize {
        self.inner.lock().remaining_balls()
    }

    pub fn tickets_left(&self) -> usize {
        self.inner.lock().tickets_left()
    }

    pub fn draw_count(&self) -> usize {
        self.inner.lock().draw_count()
    }

    pub fn pot(&self) -> Money {
        self.inner.lock().pot()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().is_closed()
    }

    pub fn purchased_tickets(&self) -> HashMap<BallNumber, String> {
        self.inner.lock().purchased_tickets()
    }

    pub fn drawn_balls(&self) -> Result<Vec<BallNumber>> {
        self.inner.lock().drawn_balls()
    }

    /// Run `f` against the draw while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&LotteryDraw) -> R) -> R {
        f(&self.inner.lock())
    }
}
