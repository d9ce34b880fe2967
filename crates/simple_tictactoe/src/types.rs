//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used for this mark in board text.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Parses a single board-text character.
    ///
    /// `X`/`x` and `O`/`o` are marks, `_` and space are empty.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Marked(Mark::X)),
            'O' | 'o' => Some(Cell::Marked(Mark::O)),
            '_' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always holds exactly nine initialized cells, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from its rows, top to bottom.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the cell at a validated position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Writes a cell. Only the game state mutates boards.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates all nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells().filter(|c| *c == Cell::Marked(mark)).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|c| c.is_empty()).count()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine row-major characters, e.g. `"XO_ X_O _X"` or `"XXXOO____"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != 9 {
            return Err(BoardParseError::WrongLength { found });
        }

        let mut board = Board::new();
        for (index, c) in s.chars().enumerate() {
            let cell = Cell::from_symbol(c).ok_or(BoardParseError::InvalidCell { index, found: c })?;
            board.cells[index / 3][index % 3] = cell;
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in self.cells() {
            let c = cell.mark().map_or('_', Mark::symbol);
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Classification of a board.
///
/// Always derived from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    #[display("Game not finished")]
    InProgress,
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
    /// A mark completed a line.
    #[display("{_0} wins")]
    Won(Mark),
    /// The board cannot arise from alternating play.
    #[display("Impossible")]
    Invalid,
}

impl GameStatus {
    /// Returns true for every status except `InProgress`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}
