//! Terminal tic-tac-toe.
//!
//! Wraps the [`tictactoe_rules`] engine with configuration, a console
//! frontend, an interactive input loop and scripted replays.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod interactive;
mod replay;

pub use config::{ConfigError, GameConfig, PLAYER1_ENV, PLAYER2_ENV, resolve_name};
pub use console::ConsoleFrontend;
pub use interactive::{InputCommand, run};
pub use replay::{ReplayError, ReplayTranscript, parse_moves, play_script};

pub use tictactoe_rules;
