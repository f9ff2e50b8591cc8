//! Command-line interface for optimal_play.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use optimal_tictactoe::Board;

/// Optimal Play - perfect tic-tac-toe by exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "optimal_play")]
#[command(about = "Find optimal tic-tac-toe moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` or `_` for
/// empty. `/`, `|`, `,`, `-`, `+` and spaces are ignored, e.g. `"XO./.X./..."`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the best action for the player to move
    Best {
        /// Board to search
        #[arg(short, long)]
        board: Board,
    },

    /// Print the minimax value of every legal action
    Analyze {
        /// Board to search
        #[arg(short, long)]
        board: Board,
    },

    /// Play the game out with both sides choosing the best action
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<Board>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_best() {
        let cli = Cli::try_parse_from(["optimal_play", "best", "--board", "XX./OO./..."]).unwrap();
        match cli.command {
            Command::Best { board } => {
                assert_eq!(board, "XX./OO./...".parse::<Board>().unwrap())
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_parse_play_with_format() {
        let cli = Cli::try_parse_from(["optimal_play", "play", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Play { board: None }));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_rejects_bad_board() {
        let result = Cli::try_parse_from(["optimal_play", "best", "--board", "XYZ"]);
        assert!(result.is_err());
    }
}
