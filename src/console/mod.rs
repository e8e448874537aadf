//! Line-oriented front end for a lottery draw.
//!
//! ```text
//! Welcome to the lottery draw of the month!
//! ...
//! Please input a command > purchase Ada
//!
//! Purchased number for Ada: 17
//! Please input a command > exit
//! ```
//!
//! The session ends on `exit` or at end of input.

mod command;

use std::io::{self, BufRead, Write};

use draw::SharedLotteryDraw;
use tracing::debug;

pub use command::{Command, CommandSet};

/// Shown before each input line.
pub const PROMPT: &str = "Please input a command > ";

pub struct Console {
    draw: SharedLotteryDraw,
    commands: CommandSet,
}

impl Console {
    pub fn new(draw: SharedLotteryDraw) -> Self {
        Self::with_commands(draw, CommandSet::default())
    }

    pub fn with_commands(draw: SharedLotteryDraw, commands: CommandSet) -> Self {
        Self { draw, commands }
    }

    /// Welcome text with the pool size and the number of balls drawn.
    pub fn banner(&self) -> String {
        let (balls, draws) = self.draw.with(|d| (d.remaining_balls(), d.draw_count()));
        format!(
            "Welcome to the lottery draw of the month!\n\
             This month's lottery contains {balls} items, {draws} items will be picked during the draw.\n\
             Type {} to display the list of available commands",
            Command::Help.id()
        )
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// Each reply is preceded by an empty line. Only I/O failures are
    /// returned; rejected lottery operations are reported as text.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", self.banner())?;

        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                debug!("console input closed");
                writeln!(output)?;
                break;
            };

            let invocation = self.commands.parse(&line);
            debug!(command = invocation.command.id(), args = ?invocation.args, "console command");
            let reply = self.commands.execute(&invocation, &self.draw);

            writeln!(output)?;
            writeln!(output, "{reply}")?;

            if invocation.command.ends_session() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::command::{MISSING_PARTICIPANT, NOT_FOUND};
    use super::*;
    use bucket::{RandomPool, ScriptedSource};
    use draw::LotteryDraw;
    use prize::PercentagesOfHalfPot;
    use std::io::Cursor;
    use types::Money;

    fn console(balls: i64, draw_count: usize) -> (Console, SharedLotteryDraw) {
        let mut pool = RandomPool::sequential(1, balls, Box::new(ScriptedSource::first_item()));
        let draw = SharedLotteryDraw::new(
            LotteryDraw::new(
                &mut pool,
                draw_count,
                Money::from_units(200),
                Money::from_units(10),
                Box::new(PercentagesOfHalfPot::new(&[0.75, 0.15, 0.10]).unwrap()),
            )
            .unwrap(),
        );
        (Console::new(draw.clone()), draw)
    }

    fn session(console: &Console, input: &str) -> String {
        let mut out = Vec::new();
        console.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner() {
        let (console, _) = console(50, 3);
        assert_eq!(
            console.banner(),
            "Welcome to the lottery draw of the month!\n\
             This month's lottery contains 50 items, 3 items will be picked during the draw.\n\
             Type help to display the list of available commands"
        );
    }

    #[test]
    fn test_exit_ends_session_before_remaining_input() {
        let (console, draw) = console(5, 2);
        let out = session(&console, "exit\npurchase Ada\n");
        assert!(out.ends_with(&format!("{PROMPT}\n\n")));
        assert!(draw.purchased_tickets().is_empty());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (console, _) = console(5, 2);
        let out = session(&console, "");
        assert!(out.ends_with(&format!("commands\n{PROMPT}\n")));
    }

    #[test]
    fn test_full_session_transcript() {
        let (console, draw) = console(3, 2);
        let out = session(
            &console,
            "purchase Ada\npurchase\nwinners\ndraw\nwinners\nbogus\nexit\n",
        );

        let expected = [
            "Welcome to the lottery draw of the month!",
            "This month's lottery contains 3 items, 2 items will be picked during the draw.",
            "Type help to display the list of available commands",
            "Please input a command > ",
            "Purchased number for Ada: 1",
            "Please input a command > ",
            MISSING_PARTICIPANT,
            "Please input a command > ",
            "Lottery draw didn't happen yet",
            "Please input a command > ",
            "Drawn ball: 1",
            "Drawn ball: 2",
            "Please input a command > ",
            // Pot 210 → half 105 → 78.75 / 15.75
            "            1st ball            2nd ball",
            "         Ada: 78.75$   No winner: 15.75$",
            "Please input a command > ",
            NOT_FOUND,
            "Please input a command > ",
            "",
        ]
        .join("\n");
        assert_eq!(out, format!("{expected}\n"));
        assert!(draw.is_closed());
    }

    #[test]
    fn test_help_in_session() {
        let (console, _) = console(3, 1);
        let out = session(&console, "help\n");
        assert!(out.contains("\nAvailable commands:\n - purchase: "));
        assert!(out.contains(" - help: Displays the list of available commands\n"));
    }
}
