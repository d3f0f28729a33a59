//! Noughts - two-player tic-tac-toe over a text console.
//!
//! # Architecture
//!
//! - **Board**: the state engine from [`noughts_core`]
//! - **Controller**: turn sequencing and command handling
//! - **I/O**: [`InputSource`] and [`OutputSink`] collaborators, with console
//!   implementations
//! - **Config**: TOML settings merged with command-line flags
//!
//! # Example
//!
//! ```
//! use noughts::{Controller, ConsoleView, ScriptedInput, SessionPhase};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn example() -> Result<(), noughts::SessionError> {
//! let input = ScriptedInput::from_lines(["Ann", "Bob", "c2", "stop"]);
//! let view = ConsoleView::new(Vec::new());
//! let mut controller = Controller::new(input, view, StdRng::seed_from_u64(1));
//!
//! controller.run()?;
//! assert_eq!(controller.phase(), SessionPhase::Terminated);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod controller;
mod error;
mod io;
mod view;

pub use cli::Cli;
pub use command::{Command, CommandError};
pub use config::{ConfigError, Settings};
pub use controller::{Controller, SessionPhase};
pub use error::SessionError;
pub use io::{ConsoleInput, InputSource, OutputSink, ScriptedInput};
pub use view::ConsoleView;
