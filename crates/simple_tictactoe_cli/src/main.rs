//! Simple tic-tac-toe - console game
//!
//! Two players share one terminal. Logs go to stderr (`RUST_LOG`), the game
//! itself uses stdin/stdout only.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use simple_tictactoe_cli::{Cli, Command, analyze, play};
use std::io;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_game(),
        Command::Analyze { board, json } => analyze(&board, json, io::stdout().lock()).map(|_| ()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_game() -> Result<()> {
    play(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
