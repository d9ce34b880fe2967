//! Command-line interface for the console game.

use clap::{Parser, Subcommand};

/// Simple tic-tac-toe for two players on one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on stdin/stdout", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game (X moves first)
    Play,

    /// Classify a board given as nine characters (X, O, `_` for empty)
    Analyze {
        /// Board cells in row-major order, e.g. `XXXOO____`
        board: String,

        /// Print the full evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from(["tictactoe", "analyze", "XXXOO____", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Analyze {
                board: "XXXOO____".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--size", "4"]).is_err());
    }
}
