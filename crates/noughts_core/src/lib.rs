//! Noughts core - the tic-tac-toe state engine.
//!
//! This crate owns the board, the player registry, the turn counter, and
//! win/draw detection. It performs no I/O; the `noughts` crate drives it
//! from a text console.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, GameStatus, Marker, Player, PlayerId};
//!
//! # fn example() -> Result<(), noughts_core::GameError> {
//! let mut board = Board::new();
//! board.register_player(Player::new(PlayerId::First, "Ann", Marker::X))?;
//! board.register_player(Player::new(PlayerId::Second, "Bob", Marker::O))?;
//!
//! assert!(board.place(PlayerId::First, 1, 1).is_ok());
//! assert_eq!(board.evaluate(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::{BOARD_SIZE, Board, MIN_MOVES_TO_WIN};
pub use error::{GameError, MoveError};
pub use position::CellToken;
pub use types::{Cell, GameStatus, Marker, Move, Player, PlayerId};
