//! Commands Module
//!
//! The static command table and the read-eval-print loop driving it.
//!
//! # Commands
//! - `help` - Displays a help message
//! - `exit` - Exit the Pokedex
//! - `map` - Next page of location areas
//! - `mapb` - Previous page of location areas
//! - `explore <area>` - Pokemon found in a location area

pub mod handlers;
pub mod repl;

pub use handlers::execute;
pub use repl::{clean_input, run, run_until, PROMPT};

// == Command ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 5] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
    ];

    /// Name typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays map locations 20 at a time",
            Command::MapBack => "Displays previous 20 map locations",
            Command::Explore => "Lists the Pokemon found in a location area",
        }
    }

    /// Looks a command up by the name typed at the prompt.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

// == Session ==
/// Paging state carried between commands.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// URL of the next location-area page, if any
    pub next: Option<String>,
    /// URL of the previous location-area page, if any
    pub previous: Option<String>,
}

// == Flow ==
/// What the REPL does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_command() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Command::from_name("catch"), None);
        assert_eq!(Command::from_name(""), None);
    }
}
