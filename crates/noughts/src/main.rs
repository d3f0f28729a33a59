//! Noughts - play tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{
    Cli, ConsoleInput, ConsoleView, Controller, InputSource, ScriptedInput, Settings,
};
use noughts_core::GameStatus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.with_overrides(cli.seed, cli.log_filter.clone());

    initialize_tracing(settings.log_filter());
    info!(config = %cli.config.display(), seeded = settings.seed().is_some(), "Starting noughts");

    let rng = match settings.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let status = match &cli.script {
        Some(path) => {
            let input = ScriptedInput::from_file(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            play(input, rng)?
        }
        None => play(
            ConsoleInput::new(io::stdin().lock(), io::stdout(), settings.prompt().clone()),
            rng,
        )?,
    };

    info!(?status, "Exiting");
    Ok(())
}

#[instrument(skip_all)]
fn play<I: InputSource>(input: I, rng: StdRng) -> Result<GameStatus> {
    let mut controller = Controller::new(input, ConsoleView::new(io::stdout()), rng);
    let status = controller.run()?;
    Ok(status)
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
