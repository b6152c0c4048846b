//! Noughts - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, PlayLoop, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

/// Builds settings from file and flags, then plays on stdin/stdout.
#[instrument(skip(cli))]
fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?
        .with_first_mover(cli.first_mover.map(Into::into))
        .with_player_one(cli.player_one)
        .with_player_two(cli.player_two);
    info!(?settings, "Starting noughts");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = PlayLoop::new(settings.session(), stdin.lock(), stdout.lock());
    game.run()?;

    let session = game.into_session();
    info!(rounds_completed = session.rounds_completed(), "Session ended");
    Ok(())
}
