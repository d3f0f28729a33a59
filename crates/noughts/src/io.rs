//! Input and output collaborators of the controller.

use noughts_core::{Board, GameStatus, Player};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Blocking source of raw command lines.
pub trait InputSource {
    /// Reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Presentation of game events. Calls must be shown in order.
pub trait OutputSink {
    /// Draws the board.
    fn render(&mut self, board: &Board);

    /// Shows a notification.
    fn notify(&mut self, message: &str);

    /// Shows a plain message or prompt.
    fn send(&mut self, message: &str);

    /// Shows the command reference.
    fn show_instructions(&mut self);

    /// Announces a finished game.
    fn show_result(&mut self, status: &GameStatus, winner: Option<&Player>);
}

/// Reads lines from a terminal, writing a prompt before each read.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt_out: W,
    prompt: String,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates a console reader that prints `prompt` to `prompt_out`.
    pub fn new(reader: R, prompt_out: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            prompt_out,
            prompt: prompt.into(),
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.prompt_out.write_all(self.prompt.as_bytes())?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Console input closed");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(line = %trimmed, "Read console line");
        Ok(Some(trimmed))
    }
}

/// A fixed queue of pre-recorded lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a script from lines, consumed in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a script with one command per line.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let script = Self::from_lines(content.lines());
        debug!(lines = script.remaining(), "Script loaded");
        Ok(script)
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
