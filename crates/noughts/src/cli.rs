//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (ignored if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Seed for marker assignment (overrides the settings file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read commands from this file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log filter directive used when RUST_LOG is unset
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        assert_eq!(cli.seed, None);
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "noughts",
            "--seed",
            "9",
            "--script",
            "moves.txt",
            "--log-filter",
            "noughts=debug",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.script, Some(PathBuf::from("moves.txt")));
        assert_eq!(cli.log_filter.as_deref(), Some("noughts=debug"));
    }
}
