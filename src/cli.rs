//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Player and display options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Name for player 1 (X)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name for player 2 (O)
    #[arg(long)]
    pub player2: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Do not ring the terminal bell
    #[arg(long)]
    pub no_sound: bool,

    /// Do not use ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play a scripted list of moves and print the result
    Replay {
        #[command(flatten)]
        game: GameArgs,

        /// Print recorded frontend events as JSON instead of the board
        #[arg(long)]
        json: bool,

        /// Moves: indices 0-8 or cell names such as `center`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
