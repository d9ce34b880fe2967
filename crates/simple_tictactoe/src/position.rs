//! Validated board coordinates.

use crate::error::MoveError;
use crate::types::Board;
use tracing::instrument;

/// A position on the board: a `(row, col)` pair, both in `0..=2`.
///
/// Positions can only be built in bounds, so a `Position` is always a
/// legal address. Whether the cell is free depends on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position, or `None` when out of bounds.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < Board::SIZE && col < Board::SIZE).then_some(Self { row, col })
    }

    /// Creates a position, reporting out-of-bounds as a move error.
    #[instrument]
    pub fn try_new(row: usize, col: usize) -> Result<Self, MoveError> {
        Self::new(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }

    /// Creates a position from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * Board::SIZE + self.col
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns only the positions whose cell is empty.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty_at(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Position::new(2, 2).is_some());
        assert_eq!(Position::new(3, 0), None);
        assert_eq!(Position::new(0, 3), None);
    }

    #[test]
    fn test_try_new_reports_coordinates() {
        assert_eq!(
            Position::try_new(1, 5),
            Err(MoveError::OutOfBounds { row: 1, col: 5 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board: Board = "X___O____".parse().unwrap();
        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::at(0, 0)));
        assert!(!valid.contains(&Position::at(1, 1)));
        assert!(valid.contains(&Position::at(2, 2)));
    }
}
