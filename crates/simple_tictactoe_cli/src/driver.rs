//! The game loop.

use crate::input::MoveReader;
use crate::render::render_board;
use anyhow::{Context, Result, bail};
use simple_tictactoe::{GameState, GameStatus};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Plays one game from `input` to `output` and returns the final status.
///
/// Renders the empty board, then per turn: read a valid move, apply it,
/// render, classify. Stops on the first terminal status and prints its
/// label.
///
/// # Errors
///
/// Fails when the input ends before the game does, on I/O errors, or when
/// the game state rejects a move the input collector accepted.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(input: R, mut output: W) -> Result<GameStatus> {
    let mut game = GameState::new();
    let mut reader = MoveReader::new(input);

    info!("Game started");
    render_board(game.board(), &mut output).context("Failed to render board")?;

    let mut status = game.current_status();
    while !status.is_terminal() {
        let Some(pos) = reader
            .read_move(game.board(), &mut output)
            .context("Failed to read move")?
        else {
            bail!("Input ended before the game finished");
        };

        let player = game.active_player();
        let board = game
            .apply_move(pos.row(), pos.col())
            .with_context(|| format!("Validated move {} was rejected", pos))?;
        render_board(board, &mut output).context("Failed to render board")?;

        status = game.current_status();
        info!(%player, position = %pos, %status, "Turn complete");
    }

    writeln!(output, "{}", status).context("Failed to write result")?;
    info!(%status, "Game finished");
    Ok(status)
}
