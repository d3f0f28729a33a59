//! Session-level errors.

use derive_more::{Display, Error, From};
use noughts_core::GameError;

/// Failure that ends a game session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// Player setup violated a board contract.
    #[display("Setup failed: {_0}")]
    Game(GameError),

    /// Input ended before both players were named.
    #[display("Input ended before player setup completed")]
    #[from(ignore)]
    SetupAborted,

    /// A command arrived before player setup.
    #[display("Players have not been set up yet")]
    #[from(ignore)]
    NotStarted,

    /// Setup was requested twice.
    #[display("Players are already set up")]
    #[from(ignore)]
    AlreadyStarted,
}
