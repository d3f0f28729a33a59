//! Human-readable coordinate vocabulary for the 3x3 board.
//!
//! Rows are labelled `t`(op), `c`(entre) and `b`(ottom); columns `1`-`3`.

use crate::board::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::instrument;

/// A cell named by its row label and column number.
///
/// Parsing via [`std::str::FromStr`] is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CellToken {
    /// Top row, first column.
    T1,
    /// Top row, second column.
    T2,
    /// Top row, third column.
    T3,
    /// Centre row, first column.
    C1,
    /// Centre row, second column.
    C2,
    /// Centre row, third column.
    C3,
    /// Bottom row, first column.
    B1,
    /// Bottom row, second column.
    B2,
    /// Bottom row, third column.
    B3,
}

impl CellToken {
    /// All 9 tokens in row-major order.
    pub const ALL: [CellToken; 9] = [
        CellToken::T1,
        CellToken::T2,
        CellToken::T3,
        CellToken::C1,
        CellToken::C2,
        CellToken::C3,
        CellToken::B1,
        CellToken::B2,
        CellToken::B3,
    ];

    /// Converts to `(row, col)`.
    pub fn coords(self) -> (usize, usize) {
        let index = self as usize;
        (index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Finds the token naming `(row, col)`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::iter().nth(row * BOARD_SIZE + col)
    }

    /// Uppercase label as printed in the instructions (`T1`, `C2`, ...).
    pub fn label(self) -> String {
        self.to_string().to_uppercase()
    }
}
