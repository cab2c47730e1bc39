//! Scripted games from a list of moves.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_rules::{
    Frontend, FrontendEvent, GameSession, GameStatus, Move, Position, RecordingFrontend,
};
use tracing::{info, instrument};

/// A move in a script could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses every move token as an index (0-8) or cell name.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn parse_moves<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Position>, ReplayError> {
    tokens
        .iter()
        .map(|t| {
            let t = t.as_ref();
            Position::from_label_or_number(t)
                .ok_or_else(|| ReplayError::new(format!("Invalid move {:?}", t)))
        })
        .collect()
}

/// Starts a game on `frontend` and plays `moves` in order.
///
/// Moves the engine rejects (taken squares, moves after the end) are
/// skipped, exactly as clicks would be.
#[instrument(skip(frontend, name1, name2))]
pub fn play_script<F: Frontend>(
    frontend: F,
    name1: &str,
    name2: &str,
    moves: &[Position],
) -> GameSession<F> {
    let mut session = GameSession::start(frontend, name1, name2);
    for pos in moves {
        session.play_round(pos.to_index());
    }
    info!(status = ?session.status(), accepted = session.history().len(), "Script finished");
    session
}

/// JSON document produced by `replay --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayTranscript {
    /// Final status.
    pub status: GameStatus,
    /// Final status line.
    pub message: String,
    /// Accepted moves.
    pub history: Vec<Move>,
    /// Every frontend notification, in order.
    pub events: Vec<FrontendEvent>,
}

impl From<GameSession<RecordingFrontend>> for ReplayTranscript {
    fn from(session: GameSession<RecordingFrontend>) -> Self {
        let status = session.status();
        let message = session.status_message();
        let history = session.history().to_vec();
        let events = session.into_frontend().events().to_vec();
        Self {
            status,
            message,
            history,
            events,
        }
    }
}
