//! Board fullness checks.

use crate::types::Board;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| !c.is_empty())
}

/// Checks if at least one cell is still empty.
pub fn has_empty(board: &Board) -> bool {
    !is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(has_empty(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XOXOXOXO_".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!has_empty(&board));
    }
}
