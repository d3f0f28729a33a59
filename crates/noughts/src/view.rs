//! Console presentation of the game.

use crate::io::OutputSink;
use noughts_core::{BOARD_SIZE, Board, CellToken, GameStatus, Player};
use std::io::Write;
use tracing::warn;

const RULE_WIDTH: usize = 30;
const CELL_SEPARATOR: &str = "—————";

/// Writes game output as plain text.
///
/// Write failures are logged and otherwise ignored; a broken terminal
/// must not abort an in-progress game.
#[derive(Debug)]
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "Failed to write console output");
        }
    }

    fn write_grid(&mut self, cells: impl Fn(usize, usize) -> String) {
        let separator = format!("\t{}", vec![CELL_SEPARATOR; BOARD_SIZE].join("+"));
        for row in 0..BOARD_SIZE {
            let line = (0..BOARD_SIZE)
                .map(|col| format!("{:^5}", cells(row, col)))
                .collect::<Vec<_>>()
                .join("|");
            self.write_line(&format!("\t{line}"));
            if row + 1 < BOARD_SIZE {
                self.write_line(&separator);
            }
        }
    }
}

impl<W: Write> OutputSink for ConsoleView<W> {
    fn render(&mut self, board: &Board) {
        self.write_grid(|row, col| board.symbol_at(row, col).to_string());
        self.write_line("");
    }

    fn notify(&mut self, message: &str) {
        self.write_line(&format!("[!] {message}"));
    }

    fn send(&mut self, message: &str) {
        self.write_line(&format!("[*] {message}"));
    }

    fn show_instructions(&mut self) {
        let rule = "=".repeat(RULE_WIDTH);
        self.write_line(&rule);
        self.write_line("You can make a move by entering the corresponding cell number:");
        self.write_grid(|row, col| {
            CellToken::from_coords(row, col)
                .map(CellToken::label)
                .unwrap_or_default()
        });
        self.write_line("Type 'who' if you forgot who is current player");
        self.write_line("Type 'stop' to exit game...");
        self.write_line("Type 'help' to see that text again");
        self.write_line(&rule);
    }

    fn show_result(&mut self, status: &GameStatus, winner: Option<&Player>) {
        match (status, winner) {
            (GameStatus::Won(_), Some(player)) => {
                self.notify(&format!("Game over: {} won this game!", player.name()));
            }
            (GameStatus::Won(id), None) => {
                self.notify(&format!("Game over: player {} won this game!", id.index() + 1));
            }
            (GameStatus::Draw, _) => self.notify("Game over: Draw!"),
            (GameStatus::InProgress, _) => self.notify("Game stopped before a result"),
        }
    }
}
