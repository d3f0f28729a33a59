//! Turn and command state machine driving a [`Board`].

use crate::command::Command;
use crate::error::SessionError;
use crate::io::{InputSource, OutputSink};
use noughts_core::invariants::{BoardInvariants, InvariantSet};
use noughts_core::{
    Board, CellToken, GameStatus, MIN_MOVES_TO_WIN, Marker, MoveError, Player, PlayerId,
};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

const ORDINALS: [&str; 2] = ["1st", "2nd"];

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Players have not been named yet.
    AwaitingSetup,
    /// Moves are being accepted.
    InProgress,
    /// Won, drawn, or stopped. Absorbing.
    Terminated,
}

/// Sequences turns and translates commands into board operations.
///
/// The controller owns the board; the input source, output sink and
/// random source are injected so sessions can be scripted and seeded.
#[derive(Debug)]
pub struct Controller<I, O, R> {
    board: Board,
    input: I,
    output: O,
    rng: R,
    phase: SessionPhase,
}

impl<I, O, R> Controller<I, O, R>
where
    I: InputSource,
    O: OutputSink,
    R: Rng,
{
    /// Creates a controller awaiting setup.
    pub fn new(input: I, output: O, rng: R) -> Self {
        Self {
            board: Board::new(),
            input,
            output,
            rng,
            phase: SessionPhase::AwaitingSetup,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the controller, returning the board and output sink.
    pub fn into_parts(self) -> (Board, O) {
        (self.board, self.output)
    }

    /// Asks for both player names, assigns markers at random, and starts
    /// the game.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyStarted`] outside `AwaitingSetup`
    /// - [`SessionError::SetupAborted`] if input ends before both names
    /// - [`SessionError::Game`] if registration is rejected
    #[instrument(skip(self))]
    pub fn setup(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::AwaitingSetup {
            return Err(SessionError::AlreadyStarted);
        }

        self.output.notify("Create your players");
        let mut names = Vec::with_capacity(ORDINALS.len());
        for (slot, ordinal) in ORDINALS.iter().enumerate() {
            names.push(self.request_name(slot, ordinal)?);
        }

        let mut markers = Marker::ALL;
        markers.shuffle(&mut self.rng);
        debug!(?markers, "Markers drawn");

        for ((id, name), marker) in PlayerId::ALL.into_iter().zip(&names).zip(markers) {
            self.board.register_player(Player::new(id, name, marker))?;
        }

        for (ordinal, player) in ORDINALS.iter().zip(self.board.players()) {
            self.output.notify(&format!(
                "{ordinal} player's name is {} and their marker is {}",
                player.name(),
                player.marker()
            ));
        }
        self.output.show_instructions();

        self.phase = SessionPhase::InProgress;
        info!("Game started");
        Ok(())
    }

    fn request_name(&mut self, slot: usize, ordinal: &str) -> Result<String, SessionError> {
        self.output.send(&format!("Enter {ordinal} player's name"));
        let line = self.input.read_line()?.ok_or_else(|| {
            warn!(slot, "Input ended during setup");
            SessionError::SetupAborted
        })?;

        let name = line.trim();
        if name.is_empty() {
            Ok(format!("Player {}", slot + 1))
        } else {
            Ok(name.to_string())
        }
    }

    /// Processes one raw command line and returns the resulting phase.
    ///
    /// Unknown commands and occupied cells are reported to the output sink
    /// and leave the game unchanged.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStarted`] before [`Controller::setup`].
    #[instrument(skip(self), fields(phase = ?self.phase, step = self.board.step()))]
    pub fn handle(&mut self, raw: &str) -> Result<SessionPhase, SessionError> {
        match self.phase {
            SessionPhase::AwaitingSetup => return Err(SessionError::NotStarted),
            SessionPhase::Terminated => {
                debug!("Command after termination");
                self.report_result();
                return Ok(self.phase);
            }
            SessionPhase::InProgress => {}
        }

        match Command::parse(raw) {
            Ok(Command::Move(token)) => self.make_move(token)?,
            Ok(Command::Help) => self.output.show_instructions(),
            Ok(Command::Who) => self.show_current_player()?,
            Ok(Command::Stop) => {
                info!("Stop requested");
                self.phase = SessionPhase::Terminated;
            }
            Err(e) => {
                debug!(error = %e, "Rejected command");
                self.output.notify("Unknown command, check 'help'");
            }
        }

        Ok(self.phase)
    }

    /// Reads and processes one command. End of input stops the session.
    ///
    /// # Errors
    ///
    /// Propagates input failures and [`Controller::handle`] errors.
    pub fn step(&mut self) -> Result<SessionPhase, SessionError> {
        match self.input.read_line()? {
            Some(line) => self.handle(&line),
            None => {
                info!("Input closed, stopping session");
                self.phase = SessionPhase::Terminated;
                Ok(self.phase)
            }
        }
    }

    /// Runs setup if needed, then processes commands until the session
    /// terminates.
    ///
    /// Returns the final status; `InProgress` means the session was stopped.
    ///
    /// # Errors
    ///
    /// Propagates setup and input failures.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus, SessionError> {
        if self.phase == SessionPhase::AwaitingSetup {
            self.setup()?;
        }
        while self.phase != SessionPhase::Terminated {
            self.step()?;
        }
        info!(status = ?self.board.status(), moves = self.board.step(), "Session finished");
        Ok(self.board.status())
    }

    fn current_player(&self) -> Result<Player, SessionError> {
        self.board
            .current_player()
            .cloned()
            .ok_or(SessionError::NotStarted)
    }

    fn make_move(&mut self, token: CellToken) -> Result<(), SessionError> {
        let player = self.current_player()?;
        let (row, col) = token.coords();

        match self.board.place(*player.id(), row, col) {
            Ok(()) => {}
            Err(MoveError::CellOccupied { .. }) => {
                debug!(%token, "Cell taken, turn not advanced");
                self.output.notify("This position is already taken, try another");
                return Ok(());
            }
            Err(e @ MoveError::OutOfBounds { .. }) => {
                warn!(%token, error = %e, "Token mapped off the board");
                self.output.notify(&e.to_string());
                return Ok(());
            }
        }

        info!(player = %player.name(), %token, step = self.board.step(), "Move accepted");
        self.output.notify(&format!("{} makes a move:", player.name()));
        self.output.render(&self.board);

        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "Board invariants violated"
        );

        // No line can be complete before MIN_MOVES_TO_WIN marks.
        if self.board.step() >= MIN_MOVES_TO_WIN {
            let status = self.board.evaluate();
            if status.is_terminal() {
                self.phase = SessionPhase::Terminated;
                info!(?status, "Game over");
                self.report_result();
            }
        }
        Ok(())
    }

    fn show_current_player(&mut self) -> Result<(), SessionError> {
        let player = self.current_player()?;
        self.output
            .notify(&format!("Current player is {}", player.name()));
        Ok(())
    }

    fn report_result(&mut self) {
        let status = self.board.status();
        let winner = status.winner().and_then(|id| self.board.player(id));
        self.output.show_result(&status, winner);
    }
}
