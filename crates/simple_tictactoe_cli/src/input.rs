//! Move input: parsing and re-prompting.
//!
//! Bad input never reaches the game state. Every rejection is reported to
//! the player and another line is read.

use derive_more::{Display, Error};
use simple_tictactoe::{Board, Position};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// A token is not an integer.
    #[display("You should enter numbers!")]
    NotNumeric,
    /// Not exactly two tokens.
    #[display("You should enter two numbers separated by a space!")]
    WrongCount,
    /// A coordinate is outside 1-3.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("This cell is occupied! Choose another one!")]
    Occupied,
}

/// Parses `row col` (both 1-3) into a zero-based position on a free cell.
///
/// Checks run in order: numeric tokens, token count, range, occupancy.
#[instrument(skip(board))]
pub fn parse_move(line: &str, board: &Board) -> Result<Position, InputError> {
    let numbers = line
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::NotNumeric)?;

    let [row, col] = numbers[..] else {
        return Err(InputError::WrongCount);
    };

    let in_range = |n: i64| (1..=3).contains(&n);
    if !in_range(row) || !in_range(col) {
        return Err(InputError::OutOfRange);
    }

    let pos = Position::new((row - 1) as usize, (col - 1) as usize).ok_or(InputError::OutOfRange)?;
    if !board.is_empty_at(pos) {
        return Err(InputError::Occupied);
    }

    Ok(pos)
}

/// Reads moves line by line from any buffered source.
#[derive(Debug)]
pub struct MoveReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> MoveReader<R> {
    /// Wraps an input source.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Reads until a valid move for `board` arrives.
    ///
    /// Each rejected line gets its message written to `out`. Returns
    /// `Ok(None)` when the input ends first.
    #[instrument(skip_all)]
    pub fn read_move<W: Write>(&mut self, board: &Board, out: &mut W) -> io::Result<Option<Position>> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            match parse_move(&self.line, board) {
                Ok(pos) => return Ok(Some(pos)),
                Err(e) => {
                    debug!(input = %self.line.trim_end(), reason = ?e, "Input rejected");
                    writeln!(out, "{}", e)?;
                    out.flush()?;
                }
            }
        }
    }
}
