//! Console commands and the table that resolves them.

use std::collections::HashMap;

use draw::{DrawError, SharedLotteryDraw};
use tracing::debug;

/// Reply to input that names no known command.
pub const NOT_FOUND: &str = "Command not found";

/// Reply to `purchase` without a name.
pub const MISSING_PARTICIPANT: &str =
    "Missing participant first name argument (usage: purchase <first name of participant>)";

// =============================================================================
// Command
// =============================================================================

/// Every action the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Purchase,
    Draw,
    Winners,
    Exit,
    Help,
    /// Blank or unknown input. Never registered in a [`CommandSet`].
    NotFound,
}

impl Command {
    /// Word typed to run the command.
    pub fn id(self) -> &'static str {
        match self {
            Command::Purchase => "purchase",
            Command::Draw => "draw",
            Command::Winners => "winners",
            Command::Exit => "exit",
            Command::Help => "help",
            Command::NotFound => "",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Purchase => {
                "Assigns a lottery ticket to the participant whose first name is passed as argument (purchase <first name of the participant>)"
            }
            Command::Draw => "Draws balls from the lottery bucket",
            Command::Winners => "Displays the winners of the draw",
            Command::Exit => "Quits the application",
            Command::Help => "Displays the list of available commands",
            Command::NotFound => "Command run when the issued command can't be found",
        }
    }

    pub fn ends_session(self) -> bool {
        matches!(self, Command::Exit)
    }
}

/// One parsed input line: the command and the words after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub command: Command,
    pub args: Vec<&'a str>,
}

// =============================================================================
// CommandSet
// =============================================================================

/// Lookup table from command id to [`Command`].
///
/// `help` is always registered and lists the commands in registration
/// order, itself last.
#[derive(Debug, Clone)]
pub struct CommandSet {
    by_id: HashMap<&'static str, Command>,
    help: String,
}

impl CommandSet {
    pub fn new(commands: &[Command]) -> Self {
        let mut listed: Vec<Command> = Vec::with_capacity(commands.len() + 1);
        for &command in commands {
            if !matches!(command, Command::Help | Command::NotFound) && !listed.contains(&command) {
                listed.push(command);
            }
        }
        listed.push(Command::Help);

        let help = std::iter::once("Available commands:".to_string())
            .chain(
                listed
                    .iter()
                    .map(|c| format!(" - {}: {}", c.id(), c.description())),
            )
            .collect::<Vec<_>>()
            .join("\n");

        let by_id = listed.into_iter().map(|c| (c.id(), c)).collect();
        Self { by_id, help }
    }

    /// Split `line` on whitespace and resolve the first word.
    pub fn parse<'a>(&self, line: &'a str) -> Invocation<'a> {
        let mut words = line.split_whitespace();
        let command = words
            .next()
            .and_then(|id| self.by_id.get(id).copied())
            .unwrap_or(Command::NotFound);
        Invocation {
            command,
            args: words.collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    /// Run `invocation` against `draw` and return the text to print.
    ///
    /// Domain failures are turned into their messages; the session goes on.
    pub fn execute(&self, invocation: &Invocation<'_>, draw: &SharedLotteryDraw) -> String {
        match invocation.command {
            Command::Purchase => purchase(draw, invocation.args.first().copied()),
            Command::Draw => run_draw(draw),
            Command::Winners => draw.winners_report().unwrap_or_else(|e| e.to_string()),
            Command::Help => self.help.clone(),
            Command::Exit => String::new(),
            Command::NotFound => NOT_FOUND.to_string(),
        }
    }
}

impl Default for CommandSet {
    /// The lottery console's commands.
    fn default() -> Self {
        Self::new(&[
            Command::Purchase,
            Command::Draw,
            Command::Winners,
            Command::Exit,
        ])
    }
}

fn purchase(draw: &SharedLotteryDraw, name: Option<&str>) -> String {
    let Some(name) = name else {
        return MISSING_PARTICIPANT.to_string();
    };
    match draw.purchase_ticket(name) {
        Ok(ticket) => format!("Purchased number for {name}: {ticket}"),
        Err(e) => {
            debug!(participant = name, error = %e, "purchase command failed");
            e.to_string()
        }
    }
}

fn run_draw(draw: &SharedLotteryDraw) -> String {
    let report = || draw.drawn_balls_report().unwrap_or_else(|e| e.to_string());
    match draw.draw() {
        Ok(()) => report(),
        Err(e @ DrawError::AlreadyClosed) => {
            debug!(error = %e, "draw command repeated");
            format!("{e}\n{}", report())
        }
        Err(e) => e.to_string(),
    }
}
