//! Lottery - Main binary
//!
//! Runs one lottery event from the console: sell tickets, draw the balls,
//! then show the winners.
//!
//! ```text
//! ┌────────────┐  lines   ┌───────────┐  lock   ┌─────────────┐
//! │   stdin    │ ───────► │  Console  │ ──────► │ LotteryDraw │
//! └────────────┘          └───────────┘         └─────────────┘
//!                               │ replies
//!                               ▼
//!                            stdout
//! ```
//!
//! Every setting has a CLI flag and a `LOTTERY_*` environment variable.
//! Logs go to stderr and default to `warn`; raise with `RUST_LOG`.

mod config;
mod console;

use std::io;

use anyhow::Context;
use clap::Parser;
use draw::SharedLotteryDraw;
use tracing::info;
use types::Money;

use config::LotteryConfig;
use console::Console;

/// Lottery - single-event ticket sales and draw
#[derive(Parser, Debug)]
#[command(name = "lottery")]
#[command(about = "Sell lottery tickets, draw the balls and display the winners")]
#[command(version)]
struct Args {
    /// Number on the first ball
    #[arg(long, env = "LOTTERY_FIRST_BALL")]
    first_ball: Option<i64>,

    /// Number of balls in the pool
    #[arg(long, env = "LOTTERY_BALLS")]
    balls: Option<i64>,

    /// Balls picked by the draw
    #[arg(long, env = "LOTTERY_DRAWS")]
    draws: Option<usize>,

    /// Initial pot amount
    #[arg(long, env = "LOTTERY_POT")]
    pot: Option<Money>,

    /// Ticket price
    #[arg(long, env = "LOTTERY_TICKET_PRICE")]
    ticket_price: Option<Money>,

    /// Comma-separated shares of half the pot per rank (e.g. 0.75,0.15,0.10)
    #[arg(long, env = "LOTTERY_PERCENTAGES", value_delimiter = ',')]
    percentages: Option<Vec<f64>>,

    /// Granularity the halved pot is floored to (e.g. 1 or 0.01)
    #[arg(long, env = "LOTTERY_FLOOR_STEP")]
    floor_step: Option<Money>,

    /// RNG seed for a reproducible draw
    #[arg(long, env = "LOTTERY_SEED")]
    seed: Option<u64>,
}

impl Args {
    /// Defaults overridden by whatever was given on the command line or in the environment.
    fn into_config(self) -> LotteryConfig {
        let mut config = LotteryConfig::default();

        if let Some(first) = self.first_ball {
            config.first_ball = first;
        }
        if let Some(balls) = self.balls {
            config.ball_count = balls;
        }
        if let Some(draws) = self.draws {
            config.draw_count = draws;
        }
        if let Some(pot) = self.pot {
            config.initial_pot = pot;
        }
        if let Some(price) = self.ticket_price {
            config.ticket_price = price;
        }
        if let Some(percentages) = self.percentages {
            config.prize_percentages = percentages;
        }
        if let Some(step) = self.floor_step {
            config.floor_step = step;
        }
        config.seed = self.seed.or(config.seed);

        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = Args::parse().into_config();
    info!(?config, "starting lottery");

    let draw = config
        .build_draw()
        .context("failed to set up the lottery draw")?;
    let console = Console::new(SharedLotteryDraw::new(draw));

    console
        .run(io::stdin().lock(), &mut io::stdout().lock())
        .context("console I/O failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_keeps_defaults() {
        let config = Args::parse_from(["lottery"]).into_config();
        assert_eq!(config.first_ball, 1);
        assert_eq!(config.ball_count, 50);
        assert_eq!(config.draw_count, 3);
        assert_eq!(config.initial_pot, Money::from_units(200));
        assert_eq!(config.prize_percentages, vec![0.75, 0.15, 0.10]);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Args::parse_from([
            "lottery",
            "--first-ball",
            "10",
            "--balls",
            "20",
            "--draws",
            "2",
            "--pot",
            "150.50",
            "--ticket-price",
            "2.5",
            "--percentages",
            "0.6,0.4",
            "--floor-step",
            "0.01",
            "--seed",
            "42",
        ])
        .into_config();

        assert_eq!(config.first_ball, 10);
        assert_eq!(config.ball_count, 20);
        assert_eq!(config.draw_count, 2);
        assert_eq!(config.initial_pot, Money::from_float(150.5));
        assert_eq!(config.ticket_price, Money::from_float(2.5));
        assert_eq!(config.prize_percentages, vec![0.6, 0.4]);
        assert_eq!(config.floor_step, Money::CENT);
        assert_eq!(config.seed, Some(42));
        assert!(config.build_draw().is_ok());
    }

    #[test]
    fn test_bad_money_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["lottery", "--pot", "12.345678"]).is_err());
        assert!(Args::try_parse_from(["lottery", "--pot", "abc"]).is_err());
    }
}
