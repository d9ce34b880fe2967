//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so any board, including one parsed from
//! untrusted text, can be classified without a game in progress.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::{has_empty, is_full};
pub use evaluate::{Evaluation, classify, evaluate};
pub use win::{LINES, has_line, line_owner, winners};
