//! Report formatting helpers.
//!
//! Winner reports are two aligned rows: right-justified `"<ordinal> ball"`
//! headers of [`HEADER_WIDTH`] characters, then `"<name>: "` cells of
//! [`WINNER_WIDTH`] characters each followed by the prize. A 14-character
//! winner cell plus a 6-character prize such as `02.30$` lines up with the
//! 20-character header above it.

use types::Money;

/// Width of each `"<ordinal> ball"` header cell.
pub const HEADER_WIDTH: usize = 20;

/// Width of each `"<name>: "` winner cell.
pub const WINNER_WIDTH: usize = 14;

/// Shown in place of a name when nobody holds the drawn ball.
pub const NO_WINNER: &str = "No winner";

/// English ordinal of `n`: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub fn ordinal(n: u64) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Prize amount with two decimals, at least two integer digits and a
/// trailing currency sign: `12.35$`, `02.30$`, `150.00$`.
pub fn format_prize(amount: Money) -> String {
    let cents = amount.to_cents();
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{:02}.{:02}$", sign, abs / 100, abs % 100)
}

/// Header cell for a 0-based rank.
pub fn header_cell(rank: usize) -> String {
    let label = format!("{} ball", ordinal(rank as u64 + 1));
    format!("{:>width$}", label, width = HEADER_WIDTH)
}

/// Winner cell: padded name followed by the formatted prize.
pub fn winner_cell(name: &str, prize: Money) -> String {
    let label = format!("{name}: ");
    format!("{:>width$}{}", label, format_prize(prize), width = WINNER_WIDTH)
}
