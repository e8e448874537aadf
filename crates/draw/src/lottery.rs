//! The lottery draw aggregate.
//!
//! # Lifecycle
//!
//! ```text
//! ┌──────────┐   draw()   ┌──────────────────┐
//! │   Open   │ ─────────► │ Closed { drawn } │
//! └──────────┘            └──────────────────┘
//!   purchase_ticket()       drawn_balls_report()
//!                           winners_report()
//! ```
//!
//! Tickets and balls come from two duplicates of the same template pool.
//! Ticket sales only consume the ticket pool and the draw only consumes the
//! ball pool, so a ticket number can be sold once and drawn once.

use std::collections::{HashMap, HashSet};
use std::fmt;

use bucket::RandomPool;
use prize::PrizeStrategy;
use serde::Serialize;
use tracing::{debug, info};
use types::{BallNumber, Money};

use crate::error::{DrawError, Result};
use crate::format::{self, NO_WINNER};

// =============================================================================
// DrawState
// =============================================================================

/// Whether the one-shot draw has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawState {
    /// Tickets on sale, no balls drawn yet.
    Open,
    /// Terminal. `drawn[0]` is the first ball drawn (rank 0).
    Closed { drawn: Vec<BallNumber> },
}

// =============================================================================
// Winner
// =============================================================================

/// One row of the winners table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    /// 0-based draw position.
    pub rank: usize,
    /// Ball drawn at this rank.
    pub ball: BallNumber,
    /// Buyer of the matching ticket, if it was sold.
    pub participant: Option<String>,
    /// Prize from the strategy; an absent result counts as zero.
    pub prize: Money,
}

// =============================================================================
// LotteryDrawBuilder
// =============================================================================

/// Validating builder for [`LotteryDraw`].
///
/// ```
/// use bucket::{RandomPool, StdRngSource};
/// use draw::LotteryDraw;
/// use prize::PercentagesOfHalfPot;
/// use types::Money;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut template = RandomPool::sequential(1, 50, Box::new(StdRngSource::seeded(7)));
/// let draw = LotteryDraw::builder()
///     .pool(&mut template)
///     .draw_count(3)
///     .initial_pot(Money::from_units(200))
///     .ticket_price(Money::from_units(10))
///     .prize_strategy(Box::new(PercentagesOfHalfPot::new(&[0.75, 0.15, 0.10])?))
///     .build()?;
/// assert_eq!(draw.tickets_left(), 50);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct LotteryDrawBuilder {
    pools: Option<(RandomPool<BallNumber>, RandomPool<BallNumber>)>,
    draw_count: usize,
    initial_pot: Money,
    ticket_price: Money,
    strategy: Option<Box<dyn PrizeStrategy>>,
}

impl LotteryDrawBuilder {
    /// Duplicate `template` into the ball pool and the ticket pool.
    ///
    /// The template stays with the caller; later extractions from it do not
    /// reach either internal pool.
    pub fn pool(mut self, template: &mut RandomPool<BallNumber>) -> Self {
        let balls = template.duplicate();
        let tickets = template.duplicate();
        self.pools = Some((balls, tickets));
        self
    }

    /// Number of balls picked by the draw.
    pub fn draw_count(mut self, draw_count: usize) -> Self {
        self.draw_count = draw_count;
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

    pub fn prize_strategy(mut self, strategy: Box<dyn PrizeStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Validate and assemble the draw.
    ///
    /// # Errors
    /// `DrawError::Initialization` when the pool or the strategy is missing,
    /// the pool is empty or holds repeated numbers, the draw count is zero
    /// or exceeds the pool size, the pot is not positive, or the ticket
    /// price is negative.
    pub fn build(self) -> Result<LotteryDraw> {
        let init = |msg: &str| DrawError::Initialization(msg.to_string());

        let (ball_pool, ticket_pool) = self
            .pools
            .ok_or_else(|| init("Items bucket can't be missing"))?;

        if ball_pool.is_empty() || self.draw_count == 0 {
            return Err(init("Bucket size or number of draws must be > 0"));
        }
        if ball_pool.len() < self.draw_count {
            return Err(init("Can't draw more items than available in the bucket"));
        }
        let distinct: HashSet<&BallNumber> = ball_pool.items().iter().collect();
        if distinct.len() != ball_pool.len() {
            return Err(init("Bucket ball numbers must be distinct"));
        }
        if !self.initial_pot.is_positive() {
            return Err(init("Initial pot amount must be > 0"));
        }
        if self.ticket_price.is_negative() {
            return Err(init("Ticket price can't be negative"));
        }
        let strategy = self
            .strategy
            .ok_or_else(|| init("Prize strategy can't be missing"))?;

        info!(
            balls = ball_pool.len(),
            draw_count = self.draw_count,
            pot = %self.initial_pot,
            ticket_price = %self.ticket_price,
            strategy = strategy.name(),
            "lottery draw opened"
        );

        Ok(LotteryDraw {
            ball_pool,
            ticket_pool,
            draw_count: self.draw_count,
            pot: self.initial_pot,
            ticket_price: self.ticket_price,
            purchased: HashMap::new(),
            state: DrawState::Open,
            strategy,
        })
    }
}

// =============================================================================
// LotteryDraw
// =============================================================================

/// A single lottery event: ticket sales, one draw, winner reports.
pub struct LotteryDraw {
    ball_pool: RandomPool<BallNumber>,
    ticket_pool: RandomPool<BallNumber>,
    draw_count: usize,
    pot: Money,
    ticket_price: Money,
    /// Ticket number → buyer first name. Only grows.
    purchased: HashMap<BallNumber, String>,
    state: DrawState,
    strategy: Box<dyn PrizeStrategy>,
}

impl LotteryDraw {
    pub fn builder() -> LotteryDrawBuilder {
        LotteryDrawBuilder::default()
    }

    /// Shorthand for the builder with every field supplied.
    pub fn new(
        template: &mut RandomPool<BallNumber>,
        draw_count: usize,
        initial_pot: Money,
        ticket_price: Money,
        strategy: Box<dyn PrizeStrategy>,
    ) -> Result<Self> {
        Self::builder()
            .pool(template)
            .draw_count(draw_count)
            .initial_pot(initial_pot)
            .ticket_price(ticket_price)
            .prize_strategy(strategy)
            .build()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Sell a random ticket to `name` and add the ticket price to the pot.
    ///
    /// # Errors
    /// - `DrawError::AlreadyClosed` after the draw
    /// - `DrawError::Pool` when every ticket is sold
    /// - `DrawError::PotOverflow` when the pot cannot hold another ticket price
    ///
    /// Nothing changes on error.
    pub fn purchase_ticket(&mut self, name: &str) -> Result<BallNumber> {
        if self.is_closed() {
            debug!(participant = name, "ticket purchase rejected: draw closed");
            return Err(DrawError::AlreadyClosed);
        }

        let pot = self.pot.checked_add(self.ticket_price).ok_or_else(|| {
            debug!(participant = name, pot = %self.pot, "ticket purchase rejected: pot overflow");
            DrawError::PotOverflow
        })?;

        let ticket = self.ticket_pool.extract_random().inspect_err(|_| {
            debug!(participant = name, "ticket purchase rejected: sold out");
        })?;

        self.purchased.insert(ticket, name.to_string());
        self.pot = pot;

        info!(%ticket, participant = name, pot = %self.pot, "ticket purchased");
        Ok(ticket)
    }

    /// Draw `draw_count` balls, in rank order, and close the draw.
    ///
    /// # Errors
    /// `DrawError::AlreadyClosed` if the draw already happened. The drawn
    /// balls are never replaced.
    pub fn draw(&mut self) -> Result<()> {
        if self.is_closed() {
            debug!("draw rejected: already happened");
            return Err(DrawError::AlreadyClosed);
        }

        let drawn = (0..self.draw_count)
            .map(|_| self.ball_pool.extract_random())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(balls = ?drawn, pot = %self.pot, "draw completed");
        self.state = DrawState::Closed { drawn };
        Ok(())
    }

    /// One `Drawn ball: <n>` line per ball, in draw order.
    ///
    /// # Errors
    /// `DrawError::NotYetDrawn` before the draw.
    pub fn drawn_balls_report(&self) -> Result<String> {
        let report = self
            .drawn()?
            .iter()
            .map(|ball| format!("Drawn ball: {ball}"))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(report)
    }

    /// Winner of each rank with the prize, as a structured list.
    ///
    /// # Errors
    /// - `DrawError::NotYetDrawn` before the draw
    /// - `DrawError::Prize` if the strategy rejects the pot
    pub fn winners(&self) -> Result<Vec<Winner>> {
        self.drawn()?
            .iter()
            .enumerate()
            .map(|(rank, &ball)| -> Result<Winner> {
                let prize = self
                    .strategy
                    .prize_amount(self.pot, rank)?
                    .unwrap_or(Money::ZERO);
                Ok(Winner {
                    rank,
                    ball,
                    participant: self.purchased.get(&ball).cloned(),
                    prize,
                })
            })
            .collect()
    }

    /// Two aligned rows: ordinal headers, then `name: prize` per rank.
    ///
    /// ```text
    ///             1st ball            2nd ball
    ///        Jihed: 50.50$       Aroua: 15.00$
    /// ```
    ///
    /// # Errors
    /// Same as [`winners`](Self::winners).
    pub fn winners_report(&self) -> Result<String> {
        let winners = self.winners()?;

        let header: String = winners.iter().map(|w| format::header_cell(w.rank)).collect();
        let row: String = winners
            .iter()
            .map(|w| format::winner_cell(w.participant.as_deref().unwrap_or(NO_WINNER), w.prize))
            .collect();

        Ok(format!("{header}\n{row}"))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Balls still in the ball pool.
    pub fn remaining_balls(&self) -> usize {
        self.ball_pool.len()
    }

    /// Tickets still for sale.
    pub fn tickets_left(&self) -> usize {
        self.ticket_pool.len()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn pot(&self) -> Money {
        self.pot
    }

    pub fn ticket_price(&self) -> Money {
        self.ticket_price
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, DrawState::Closed { .. })
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Snapshot of ticket number → buyer.
    pub fn purchased_tickets(&self) -> HashMap<BallNumber, String> {
        self.purchased.clone()
    }

    /// Snapshot of the drawn balls in draw order.
    ///
    /// # Errors
    /// `DrawError::NotYetDrawn` before the draw.
    pub fn drawn_balls(&self) -> Result<Vec<BallNumber>> {
        self.drawn().map(<[BallNumber]>::to_vec)
    }

    fn drawn(&self) -> Result<&[BallNumber]> {
        match &self.state {
            DrawState::Closed { drawn } => Ok(drawn),
            DrawState::Open => Err(DrawError::NotYetDrawn),
        }
    }
}

impl fmt::Debug for LotteryDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LotteryDraw")
            .field("remaining_balls", &self.ball_pool.len())
            .field("tickets_left", &self.ticket_pool.len())
            .field("draw_count", &self.draw_count)
            .field("pot", &self.pot)
            .field("ticket_price", &self.ticket_price)
            .field("purchased", &self.purchased)
            .field("state", &self.state)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
