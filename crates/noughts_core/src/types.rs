//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Registration slot of a player. The first player moves on even steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Registered first, moves on steps 0, 2, 4, ...
    First,
    /// Registered second, moves on steps 1, 3, 5, ...
    Second,
}

impl PlayerId {
    /// Both ids in registration order.
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Returns the slot index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Returns whose turn it is after `step` completed moves.
    pub fn from_step(step: usize) -> Self {
        Self::ALL[step % 2]
    }

    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }
}

/// Symbol identifying a player's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Marker {
    /// The full marker alphabet.
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    /// Returns the printable symbol.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Parses a one-character marker, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMarker`] unless `symbol` is exactly one
    /// character from the alphabet.
    #[instrument]
    pub fn parse(symbol: &str) -> Result<Self, GameError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match c.to_ascii_uppercase() {
                'X' => Ok(Marker::X),
                'O' => Ok(Marker::O),
                _ => Err(GameError::InvalidMarker {
                    symbol: symbol.to_string(),
                }),
            },
            _ => Err(GameError::InvalidMarker {
                symbol: symbol.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet marked.
    #[default]
    Empty,
    /// Owned by a player. Never changes once set.
    Marked(PlayerId),
}

impl Cell {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Marked(id) => Some(id),
        }
    }
}

/// A participant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Registration slot.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Owned marker.
    marker: Marker,
}

impl Player {
    /// Creates a player with an already validated marker.
    #[instrument(skip(name), fields(player_name = %name.as_ref()))]
    pub fn new(id: PlayerId, name: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            id,
            name: name.as_ref().to_string(),
            marker,
        }
    }

    /// Creates a player from a raw marker symbol.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMarker`] if `symbol` is not a valid marker.
    #[instrument(skip(name))]
    pub fn from_symbol(id: PlayerId, name: impl AsRef<str>, symbol: &str) -> Result<Self, GameError> {
        let marker = Marker::parse(symbol)?;
        Ok(Self::new(id, name, marker))
    }
}

/// Outcome of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed and empty cells remain.
    #[default]
    InProgress,
    /// Full board, no completed line.
    Draw,
    /// A line is uniformly owned by this player.
    Won(PlayerId),
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(id) => Some(id),
            _ => None,
        }
    }
}

/// One accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who placed the mark.
    pub player: PlayerId,
    /// Row of the marked cell.
    pub row: usize,
    /// Column of the marked cell.
    pub col: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> ({}, {})", self.player, self.row, self.col)
    }
}
