//! Error taxonomy for the board engine.

use derive_more::{Display, Error};

/// Contract violation while setting up or querying players.
///
/// None of these leave the board in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A marker symbol outside the fixed `X`/`O` alphabet was supplied at construction.
    #[display("Invalid marker {symbol:?}, only 'X' or 'O'")]
    InvalidMarker {
        /// The rejected symbol.
        symbol: String,
    },

    /// No registered player owns the requested marker.
    #[display("Unknown marker {symbol:?}, it should be 'X' or 'O' and owned by a player")]
    UnknownMarker {
        /// The symbol that was looked up.
        symbol: String,
    },

    /// Both player slots are already taken.
    #[display("Only 2 players allowed")]
    TooManyPlayers,

    /// The marker already belongs to a registered player.
    #[display("Marker {marker} is already taken")]
    DuplicateMarker {
        /// The contested marker symbol.
        marker: char,
    },

    /// Players must register in slot order (first, then second).
    #[display("Expected player {expected} to register next, got player {got}")]
    UnexpectedPlayerId {
        /// Slot index that was free.
        expected: usize,
        /// Slot index the player carried.
        got: usize,
    },
}

/// A placement the board refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell is already marked.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the rejected cell.
        row: usize,
        /// Column of the rejected cell.
        col: usize,
    },

    /// The coordinates fall outside the grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
