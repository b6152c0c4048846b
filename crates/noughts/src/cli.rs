//! Command-line interface for noughts.

use clap::{Parser, ValueEnum};
use noughts_engine::FirstMoverPolicy;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe with running scores
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a friend and keep score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who opens each round (overrides the settings file)
    #[arg(long, value_enum)]
    pub first_mover: Option<FirstMover>,

    /// Name of the first player (overrides the settings file)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (overrides the settings file)
    #[arg(long)]
    pub player_two: Option<String>,
}

/// First-mover choices accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMover {
    /// Player 1 opens every round
    AlwaysFirst,
    /// Players take turns opening
    Alternate,
}

impl From<FirstMover> for FirstMoverPolicy {
    fn from(choice: FirstMover) -> Self {
        match choice {
            FirstMover::AlwaysFirst => FirstMoverPolicy::AlwaysFirst,
            FirstMover::Alternate => FirstMoverPolicy::Alternate,
        }
    }
}
