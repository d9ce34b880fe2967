//! Game state: the board plus the player to move.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{self, Evaluation};
use crate::types::{Board, Cell, GameStatus, Mark};
use tracing::{debug, error, instrument, warn};

/// Authoritative game state.
///
/// The status is never stored: it is recomputed from the board on demand,
/// so it cannot drift from the grid. All mutation goes through
/// [`GameState::apply_move`] / [`GameState::place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Mark,
    /// Set when the game started from an empty board, so the mark balance
    /// must hold after every move.
    from_empty: bool,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Mark::X)
    }

    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn starting_with(first: Mark) -> Self {
        Self {
            board: Board::new(),
            active: first,
            from_empty: true,
        }
    }

    /// Adopts an externally supplied board.
    ///
    /// X moves next unless X already has more marks than O.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Self {
        let active = if board.count(Mark::X) > board.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        };
        Self {
            board,
            active,
            from_empty: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark placed by the next move.
    pub fn active_player(&self) -> Mark {
        self.active
    }

    /// Classifies the live board.
    pub fn current_status(&self) -> GameStatus {
        rules::classify(&self.board)
    }

    /// Full rules evaluation of the live board.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(&self.board)
    }

    /// Places the active mark at `(row, col)` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the coordinates are out of bounds, the
    /// cell is occupied, or the game is already over. The state is left
    /// unchanged in every error case.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<&Board, MoveError> {
        let pos = Position::try_new(row, col).inspect_err(|e| {
            error!(error = %e, "Move rejected");
        })?;
        self.place(pos)
    }

    /// Places the active mark at an in-bounds position and passes the turn.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::apply_move`], minus the bounds check.
    #[instrument(skip(self), fields(position = %pos, player = %self.active))]
    pub fn place(&mut self, pos: Position) -> Result<&Board, MoveError> {
        let status = self.current_status();
        if status.is_terminal() {
            warn!(%status, "Move after game over");
            return Err(MoveError::GameOver { status });
        }

        if !self.board.is_empty_at(pos) {
            error!("Move onto occupied cell");
            return Err(MoveError::Occupied {
                row: pos.row(),
                col: pos.col(),
            });
        }

        self.board.set(pos, Cell::Marked(self.active));
        self.active = self.active.opponent();

        debug_assert!(
            !self.from_empty
                || self.board.count(Mark::X).abs_diff(self.board.count(Mark::O)) <= 1,
            "Mark balance violated"
        );
        debug!(next = %self.active, "Move applied");

        Ok(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.active_player(), Mark::X);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_writes_mark_and_toggles() {
        let mut game = GameState::new();
        let board = game.apply_move(0, 2).unwrap();
        assert_eq!(board.get(0, 2), Some(Cell::Marked(Mark::X)));
        assert_eq!(game.active_player(), Mark::O);

        game.apply_move(1, 1).unwrap();
        assert_eq!(game.board().get(1, 1), Some(Cell::Marked(Mark::O)));
        assert_eq!(game.active_player(), Mark::X);
    }

    #[test]
    fn test_starting_with_o() {
        let mut game = GameState::starting_with(Mark::O);
        game.apply_move(0, 0).unwrap();
        assert_eq!(game.board().get(0, 0), Some(Cell::Marked(Mark::O)));
        assert_eq!(game.active_player(), Mark::X);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_second_move_on_same_cell_rejected() {
        let mut game = GameState::new();
        game.apply_move(1, 1).unwrap();
        let before = game.clone();

        assert_eq!(
            game.apply_move(1, 1),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(game, before);
        assert_eq!(game.board().get(1, 1), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut game = GameState::from_board("XXXOO____".parse().unwrap());
        assert_eq!(
            game.apply_move(2, 2),
            Err(MoveError::GameOver {
                status: GameStatus::Won(Mark::X)
            })
        );
    }

    #[test]
    fn test_from_board_infers_active_player() {
        assert_eq!(
            GameState::from_board("X________".parse().unwrap()).active_player(),
            Mark::O
        );
        assert_eq!(
            GameState::from_board("XO_______".parse().unwrap()).active_player(),
            Mark::X
        );
    }

    #[test]
    fn test_invalid_board_is_terminal() {
        let mut game = GameState::from_board("XXXXXO___".parse().unwrap());
        assert_eq!(game.current_status(), GameStatus::Invalid);
        assert!(matches!(
            game.apply_move(2, 2),
            Err(MoveError::GameOver { .. })
        ));
    }
}
