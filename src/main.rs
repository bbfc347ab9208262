//! Marble Solitaire - command-line game
//!
//! Plays one game of peg solitaire on stdin/stdout.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use marble_solitaire::{Cli, GameSession};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays the game transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

/// Builds the board and plays it on stdin/stdout.
#[instrument]
fn run(cli: Cli) -> Result<()> {
    let config = cli.game_config()?;
    let board = config.build_board()?;
    info!(shape = %board.shape(), "Starting game");

    let stdin = io::stdin();
    let mut session = GameSession::new(board, stdin.lock(), io::stdout().lock());
    let outcome = session.play()?;

    info!(?outcome, "Session finished");
    Ok(())
}
