//! Central configuration for the lottery console.
//!
//! Defaults describe the lottery of the month: balls 1 to 50, three balls
//! drawn, a 200 pot, tickets at 10 and a 75/15/10 split of half the pot.

use bucket::{RandomPool, RandomSource, StdRngSource};
use draw::{LotteryDraw, Result};
use prize::PercentagesOfHalfPot;
use types::Money;

/// Master configuration for one lottery event.
#[derive(Debug, Clone)]
pub struct LotteryConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Pool
    // ─────────────────────────────────────────────────────────────────────────
    /// Number on the first ball.
    pub first_ball: i64,
    /// Number of balls in the pool.
    pub ball_count: i64,
    /// Balls picked by the draw.
    pub draw_count: usize,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Money
    // ─────────────────────────────────────────────────────────────────────────
    /// Pot before any ticket is sold.
    pub initial_pot: Money,
    /// Added to the pot on each purchase.
    pub ticket_price: Money,

    // ─────────────────────────────────────────────────────────────────────────
    // Prizes
    // ─────────────────────────────────────────────────────────────────────────
    /// Share of half the pot per rank (0.75 = 75%).
    pub prize_percentages: Vec<f64>,
    /// Granularity the halved pot is floored to.
    pub floor_step: Money,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            first_ball: 1,
            ball_count: 50,
            draw_count: 3,
            seed: None,

            initial_pot: Money::from_units(200),
            ticket_price: Money::from_units(10),

            prize_percentages: vec![0.75, 0.15, 0.10],
            floor_step: Money::ONE,
        }
    }
}

impl LotteryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn first_ball(mut self, first: i64) -> Self {
        self.first_ball = first;
        self
    }

    pub fn ball_count(mut self, count: i64) -> Self {
        self.ball_count = count;
        self
    }

    pub fn draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn initial_pot(mut self, pot: Money) -> Self {
        self.initial_pot = pot;
        self
    }

    pub fn ticket_price(mut self, price: Money) -> Self {
        self.ticket_price = price;
        self
    }

    pub fn prize_percentages(mut self, percentages: Vec<f64>) -> Self {
        self.prize_percentages = percentages;
        self
    }

    pub fn floor_step(mut self, step: Money) -> Self {
        self.floor_step = step;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assembly
    // ─────────────────────────────────────────────────────────────────────────

    /// Randomness for the ball pool, seeded when `seed` is set.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(StdRngSource::seeded(seed)),
            None => Box::new(StdRngSource::default()),
        }
    }

    /// Build the sequential pool, the prize strategy and the draw.
    ///
    /// # Errors
    /// `DrawError::Prize` for invalid percentages or floor step,
    /// `DrawError::Initialization` for anything the draw rejects.
    pub fn build_draw(&self) -> Result<LotteryDraw> {
        let strategy = PercentagesOfHalfPot::new(&self.prize_percentages)?
            .with_floor_step(self.floor_step)?;
        let mut template = RandomPool::sequential(self.first_ball, self.ball_count, self.random_source());

        LotteryDraw::builder()
            .pool(&mut template)
            .draw_count(self.draw_count)
            .initial_pot(self.initial_pot)
            .ticket_price(self.ticket_price)
            .prize_strategy(Box::new(strategy))
            .build()
    }
}
