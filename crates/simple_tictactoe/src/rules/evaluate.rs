//! Board classification.
//!
//! Classification is a pure function of the board. It does not track how
//! the board was reached, so it can be reapplied after every move and also
//! detects boards that alternating play could never produce.

use super::draw::has_empty;
use super::win::winners;
use crate::types::{Board, GameStatus, Mark};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Everything the rules learned about a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct Evaluation {
    /// Number of X marks.
    x_count: usize,
    /// Number of O marks.
    o_count: usize,
    /// Whether X completed a line.
    x_line: bool,
    /// Whether O completed a line.
    o_line: bool,
    /// Number of empty cells.
    empty_count: usize,
    /// Resulting classification.
    status: GameStatus,
}

impl Evaluation {
    /// Absolute difference between the two mark counts.
    pub fn count_skew(&self) -> usize {
        self.x_count.abs_diff(self.o_count)
    }
}

/// Evaluates a board.
///
/// Precedence, first match wins:
/// 1. `Invalid` when the counts differ by more than one or both marks
///    completed a line
/// 2. `Won(X)`, then `Won(O)`
/// 3. `InProgress` while any cell is empty
/// 4. `Draw`
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);
    let complete = winners(board);
    let x_line = complete.contains(&Mark::X);
    let o_line = complete.contains(&Mark::O);

    let status = if x_count.abs_diff(o_count) > 1 || (x_line && o_line) {
        GameStatus::Invalid
    } else if x_line {
        GameStatus::Won(Mark::X)
    } else if o_line {
        GameStatus::Won(Mark::O)
    } else if has_empty(board) {
        GameStatus::InProgress
    } else {
        GameStatus::Draw
    };

    debug!(x_count, o_count, x_line, o_line, %status, "Board evaluated");

    Evaluation {
        x_count,
        o_count,
        x_line,
        o_line,
        empty_count: board.empty_count(),
        status,
    }
}

/// Classifies a board.
pub fn classify(board: &Board) -> GameStatus {
    evaluate(board).status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(text: &str) -> GameStatus {
        classify(&text.parse().unwrap())
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(classify(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_x_wins_top_row() {
        assert_eq!(status_of("XXXOO____"), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_o_wins_column() {
        assert_eq!(status_of("OXXOX_O__"), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_draw() {
        assert_eq!(status_of("XOXXOOOXX"), GameStatus::Draw);
    }

    #[test]
    fn test_count_skew_is_invalid() {
        assert_eq!(status_of("XXXXXO___"), GameStatus::Invalid);
        assert_eq!(status_of("OOO______"), GameStatus::Invalid);
    }

    #[test]
    fn test_both_winning_is_invalid() {
        assert_eq!(status_of("XXXOOO___"), GameStatus::Invalid);
    }

    #[test]
    fn test_count_skew_beats_win() {
        // X completes the top row but has three more marks than O.
        assert_eq!(status_of("XXXX_____"), GameStatus::Invalid);
    }

    #[test]
    fn test_two_lines_for_one_mark_is_a_win() {
        // X completes the top row and the left column.
        assert_eq!(status_of("XXXXOOXOO"), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_evaluation_counts() {
        let eval = evaluate(&"XXXOO____".parse().unwrap());
        assert_eq!(*eval.x_count(), 3);
        assert_eq!(*eval.o_count(), 2);
        assert!(*eval.x_line());
        assert!(!*eval.o_line());
        assert_eq!(*eval.empty_count(), 4);
        assert_eq!(eval.count_skew(), 1);
    }
}
