//! Draw: the lottery state machine.
//!
//! This crate glues two independent [`RandomPool`](bucket::RandomPool)s (one
//! for balls, one for tickets) to ticket sales, the one-shot draw and the
//! winner reports:
//! - [`LotteryDraw`]: the aggregate, built through [`LotteryDrawBuilder`]
//! - [`SharedLotteryDraw`]: a cloneable handle serialising every operation
//!   behind one lock
//! - [`format`]: ordinal labels and fixed-width money columns used by reports

mod error;
pub mod format;
mod lottery;
mod shared;

pub use error::{DrawError, Result};
pub use lottery::{DrawState, LotteryDraw, LotteryDrawBuilder, Winner};
pub use shared::SharedLotteryDraw;
