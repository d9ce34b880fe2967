//! Simple tic-tac-toe - board state and rules evaluation.
//!
//! This crate holds the pure game core. It has no I/O: input parsing,
//! rendering and the game loop live in `simple_tictactoe_cli`.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the 3x3 board and the game status
//! - **Position**: validated in-bounds coordinates
//! - **Rules**: stateless classification of any board
//! - **Game**: the board plus the player to move, mutated one move at a time
//!
//! # Example
//!
//! ```
//! use simple_tictactoe::{GameState, GameStatus, Mark};
//!
//! let mut game = GameState::new();
//! game.apply_move(1, 1)?;
//! assert_eq!(game.active_player(), Mark::O);
//! assert_eq!(game.current_status(), GameStatus::InProgress);
//! # Ok::<(), simple_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use error::{BoardParseError, MoveError};
pub use game::GameState;
pub use position::Position;
pub use rules::{Evaluation, classify, evaluate};
pub use types::{Board, Cell, GameStatus, Mark};
