//! Console front end for simple tic-tac-toe.
//!
//! Reads moves as `row col` lines (1-3 each), re-prompts on bad input,
//! prints the board after every move and announces the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod driver;
mod input;
mod render;

pub use analyze::analyze;
pub use cli::{Cli, Command};
pub use driver::play;
pub use input::{InputError, MoveReader, parse_move};
pub use render::{board_to_string, render_board};
