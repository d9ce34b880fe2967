//! Console rendering of the board.

use simple_tictactoe::{Board, Mark};
use std::io::{self, Write};

const RULE: &str = "---------";

/// Formats the board as a bordered 3x3 grid.
///
/// ```text
/// ---------
/// | X O X |
/// |   X   |
/// | O     |
/// ---------
/// ```
pub fn board_to_string(board: &Board) -> String {
    let mut text = String::with_capacity(5 * 10);
    text.push_str(RULE);
    text.push('\n');
    for row in board.rows() {
        text.push('|');
        for cell in row {
            text.push(' ');
            text.push(cell.mark().map_or(' ', Mark::symbol));
        }
        text.push_str(" |\n");
    }
    text.push_str(RULE);
    text.push('\n');
    text
}

/// Writes the board to `out`.
pub fn render_board<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    out.write_all(board_to_string(board).as_bytes())?;
    out.flush()
}
