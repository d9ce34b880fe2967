//! Line detection for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Returns the mark filling all three cells of `line`, if any.
pub fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Mark> {
    let [a, b, c] = *line;
    let (a, b, c) = (board.cell(a), board.cell(b), board.cell(c));
    match a {
        Cell::Marked(mark) if a == b && b == c => Some(mark),
        _ => None,
    }
}

/// Checks if `mark` has completed at least one line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(mark))
}

/// Every mark that has completed a line, X first.
///
/// More than one entry means the board is impossible.
pub fn winners(board: &Board) -> Vec<Mark> {
    Mark::iter().filter(|mark| has_line(board, *mark)).collect()
}
