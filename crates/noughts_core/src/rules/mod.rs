//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The board caches the result of
//! [`evaluate`]; nothing here mutates.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::{BOARD_SIZE, Board, GameStatus};
use tracing::instrument;

/// A row, column or diagonal as `(row, col)` pairs.
pub type Line = [(usize, usize); BOARD_SIZE];

/// Returns every line on the board: rows, then columns, then both diagonals.
pub fn lines() -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * BOARD_SIZE + 2);
    for row in 0..BOARD_SIZE {
        lines.push(std::array::from_fn(|col| (row, col)));
    }
    for col in 0..BOARD_SIZE {
        lines.push(std::array::from_fn(|row| (row, col)));
    }
    lines.push(std::array::from_fn(|i| (i, i)));
    lines.push(std::array::from_fn(|i| (i, BOARD_SIZE - 1 - i)));
    lines
}

/// Derives the game status from cell contents alone.
///
/// A completed line wins even when the board is also full.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
