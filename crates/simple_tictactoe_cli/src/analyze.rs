//! One-shot classification of a board given as text.

use crate::render::render_board;
use anyhow::{Context, Result};
use simple_tictactoe::{Board, GameStatus, evaluate};
use std::io::Write;
use tracing::{info, instrument};

/// Parses `board_text`, prints the board and its status label.
///
/// With `json`, prints the full evaluation as JSON instead.
///
/// # Errors
///
/// Fails when the text is not a valid board or output fails.
#[instrument(skip(output))]
pub fn analyze<W: Write>(board_text: &str, json: bool, mut output: W) -> Result<GameStatus> {
    let board = board_text
        .parse::<Board>()
        .with_context(|| format!("Failed to parse board {:?}", board_text))?;
    let evaluation = evaluate(&board);
    let status = *evaluation.status();
    info!(%status, "Board analyzed");

    if json {
        let text = serde_json::to_string_pretty(&evaluation).context("Failed to serialize evaluation")?;
        writeln!(output, "{}", text)?;
    } else {
        render_board(&board, &mut output)?;
        writeln!(output, "{}", status)?;
    }

    Ok(status)
}
