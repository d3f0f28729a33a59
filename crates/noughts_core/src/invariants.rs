//! First-class invariants over the board.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and can be tested independently.

use crate::{Board, Cell, PlayerId};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Board invariants violated");
            Err(violations)
        }
    }
}

/// Step counter equals both the number of marked cells and the history length.
pub struct StepMatchesOccupancy;

impl Invariant<Board> for StepMatchesOccupancy {
    fn holds(board: &Board) -> bool {
        let marked = board
            .rows()
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count();
        marked == board.step() && marked == board.history().len()
    }

    fn description() -> &'static str {
        "Step counter equals the number of marked cells"
    }
}

/// Moves alternate strictly, starting with the first player.
pub struct AlternatingTurns;

impl Invariant<Board> for AlternatingTurns {
    fn holds(board: &Board) -> bool {
        board
            .history()
            .iter()
            .enumerate()
            .all(|(step, mv)| mv.player == PlayerId::from_step(step))
    }

    fn description() -> &'static str {
        "Players alternate turns, first player on even steps"
    }
}

/// At most two players, each in its own slot with a distinct marker.
pub struct UniqueMarkers;

impl Invariant<Board> for UniqueMarkers {
    fn holds(board: &Board) -> bool {
        let players = board.players();
        players.len() <= PlayerId::ALL.len()
            && players.iter().enumerate().all(|(slot, p)| p.id().index() == slot)
            && players
                .iter()
                .enumerate()
                .all(|(i, a)| players[i + 1..].iter().all(|b| a.marker() != b.marker()))
    }

    fn description() -> &'static str {
        "Two players at most, with distinct markers"
    }
}

/// Every board invariant.
pub type BoardInvariants = (StepMatchesOccupancy, AlternatingTurns, UniqueMarkers);
