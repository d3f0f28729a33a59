//! The board: grid, player registry, step counter and cached status.

use crate::error::{GameError, MoveError};
use crate::invariants::{Invariant, StepMatchesOccupancy};
use crate::rules;
use crate::types::{Cell, GameStatus, Marker, Move, Player, PlayerId};
use tracing::{debug, info, instrument, warn};

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 3;

/// Fewest moves after which a line can be complete (`2N - 1`).
pub const MIN_MOVES_TO_WIN: usize = 2 * BOARD_SIZE - 1;

/// Single mutable owner of the game state.
///
/// Cells change only through [`Board::place`]; a marked cell is never
/// cleared or overwritten. Turn order is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    players: Vec<Player>,
    history: Vec<Move>,
    status: GameStatus,
}

impl Board {
    /// Creates an empty board with no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `(row, col)` for `player`.
    ///
    /// # Errors
    ///
    /// [`MoveError::CellOccupied`] if the cell is already marked and
    /// [`MoveError::OutOfBounds`] for coordinates off the grid. The board is
    /// untouched in both cases.
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn place(&mut self, player: PlayerId, row: usize, col: usize) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MoveError::OutOfBounds { row, col })?;

        if *cell != Cell::Empty {
            debug!(row, col, "Cell already occupied");
            return Err(MoveError::CellOccupied { row, col });
        }

        *cell = Cell::Marked(player);
        self.history.push(Move { player, row, col });
        debug!(step = self.step(), "Mark placed");

        debug_assert!(
            StepMatchesOccupancy::holds(self),
            "{}",
            StepMatchesOccupancy::description()
        );
        Ok(())
    }

    /// Recomputes the status from the cells and caches it.
    ///
    /// Idempotent: the same cells always give the same status.
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn evaluate(&mut self) -> GameStatus {
        self.status = rules::evaluate(self);
        debug!(status = ?self.status, "Board evaluated");
        self.status
    }

    /// Returns the status cached by the last [`Board::evaluate`].
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Adds a player to the registry.
    ///
    /// # Errors
    ///
    /// - [`GameError::TooManyPlayers`] once two players are registered
    /// - [`GameError::UnexpectedPlayerId`] if the id is not the next free slot
    /// - [`GameError::DuplicateMarker`] if another player owns the marker
    #[instrument(skip(self, player), fields(player_name = %player.name(), marker = %player.marker()))]
    pub fn register_player(&mut self, player: Player) -> Result<(), GameError> {
        let expected = self.players.len();
        if expected >= PlayerId::ALL.len() {
            warn!("Board already has 2 players");
            return Err(GameError::TooManyPlayers);
        }
        if player.id().index() != expected {
            return Err(GameError::UnexpectedPlayerId {
                expected,
                got: player.id().index(),
            });
        }
        if self.players.iter().any(|p| p.marker() == player.marker()) {
            return Err(GameError::DuplicateMarker {
                marker: player.marker().symbol(),
            });
        }

        info!(slot = expected, "Player registered");
        self.players.push(player);
        Ok(())
    }

    /// Finds the player owning `symbol`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownMarker`] if the symbol is outside the alphabet or
    /// no registered player owns it.
    #[instrument(skip(self))]
    pub fn lookup_player_by_marker(&self, symbol: &str) -> Result<&Player, GameError> {
        let unknown = || GameError::UnknownMarker {
            symbol: symbol.to_string(),
        };
        let marker = Marker::parse(symbol).map_err(|_| unknown())?;
        self.players
            .iter()
            .find(|p| *p.marker() == marker)
            .ok_or_else(unknown)
    }

    /// Returns the player whose turn it is, once both are registered.
    pub fn current_player(&self) -> Option<&Player> {
        if self.players.len() < PlayerId::ALL.len() {
            return None;
        }
        self.players.get(PlayerId::from_step(self.step()).index())
    }

    /// Returns the registered player in slot `id`.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Returns the marker of player `id`, if registered.
    pub fn marker_of(&self, id: PlayerId) -> Option<Marker> {
        self.player(id).map(|p| *p.marker())
    }

    /// Returns the registered players in slot order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the cell at `(row, col)`, `None` off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of completed moves.
    pub fn step(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the printable symbol of a cell: the owner's marker, `.` if
    /// empty or if the owner is not registered.
    pub fn symbol_at(&self, row: usize, col: usize) -> char {
        self.cell(row, col)
            .and_then(Cell::owner)
            .and_then(|id| self.marker_of(id))
            .map_or('.', Marker::symbol)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let symbols: String = (0..BOARD_SIZE).map(|col| self.symbol_at(row, col)).collect();
            writeln!(f, "{symbols}")?;
        }
        Ok(())
    }
}
