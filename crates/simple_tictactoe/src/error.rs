//! Error types for the game core.

use crate::types::GameStatus;
use derive_more::{Display, Error};

/// Precondition violation when applying a move.
///
/// These indicate a bug in the caller: moves are validated by the input
/// collector before they reach the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("Move ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already reached a terminal status.
    #[display("Game is already over ({status})")]
    GameOver {
        /// Status at the time of the move.
        status: GameStatus,
    },
}

/// Error parsing board text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Board text must have exactly nine characters.
    #[display("Board must have 9 cells, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },

    /// Character is not `X`, `O`, `_` or space.
    #[display("Invalid cell {found:?} at index {index}")]
    InvalidCell {
        /// Zero-based character index.
        index: usize,
        /// Offending character.
        found: char,
    },
}
