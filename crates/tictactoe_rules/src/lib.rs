//! Pure tic-tac-toe rules engine.
//!
//! [`GameSession`] owns the board, the two players, the turn and the
//! outcome. It reports every accepted move to a [`Frontend`], which is
//! any type implementing [`Renderer`], [`StatusDisplay`] and
//! [`CuePlayer`].
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{GameSession, GameStatus, Mark, RecordingFrontend};
//!
//! let mut game = GameSession::start(RecordingFrontend::new(), "Ann", "Bo");
//! for index in [0, 1, 3, 4, 6] {
//!     game.play_round(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! assert_eq!(game.frontend().last_status(), Some("Ann wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod frontend;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, Rejection, RoundOutcome};
pub use frontend::{
    Cue, CuePlayer, Frontend, FrontendEvent, RecordingFrontend, Renderer, StatusDisplay,
};
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, is_full, is_tie, winning_lines};
pub use session::{DEFAULT_PLAYER1, DEFAULT_PLAYER2, GameSession, TIE_MESSAGE};
pub use types::{Board, CELL_COUNT, GameStatus, Mark, Player, Square};
