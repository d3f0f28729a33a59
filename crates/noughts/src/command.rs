//! Parsing of raw command lines.

use derive_more::{Display, Error};
use noughts_core::CellToken;
use std::str::FromStr;
use tracing::instrument;

/// A recognised player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the named cell for the current player.
    Move(CellToken),
    /// Show the instructions again.
    Help,
    /// Report whose turn it is.
    Who,
    /// End the session.
    Stop,
}

/// A line that is not part of the command vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Not a cell token or keyword.
    #[display("Unrecognized command {token:?}")]
    Unrecognized {
        /// The normalised input.
        token: String,
    },
}

impl Command {
    /// Parses a raw line.
    ///
    /// All whitespace is removed and case is ignored, so `" T 1"` is `t1`.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        let token: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match token.as_str() {
            "help" => Ok(Command::Help),
            "who" => Ok(Command::Who),
            "stop" => Ok(Command::Stop),
            other => CellToken::from_str(other)
                .map(Command::Move)
                .map_err(|_| CommandError::Unrecognized {
                    token: other.to_string(),
                }),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
