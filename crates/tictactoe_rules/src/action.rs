//! Moves, rejections and round outcomes.
//!
//! Moves are domain events: an accepted move is recorded in the session
//! history, a rejected one leaves no trace beyond its [`Rejection`].

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move attempt was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already has a winner or ended in a tie.
    #[display("Game is already over")]
    GameOver,

    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for Rejection {}

/// What a call to `play_round` did.
///
/// Collaborators never observe an [`RoundOutcome::Ignored`] round; the
/// value exists for callers that want to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The move was rejected and nothing changed.
    Ignored(Rejection),
    /// The move was accepted and the turn passed to this mark.
    Continued(Mark),
    /// The move completed one or more lines.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Every line completed on the board, in table order.
        lines: Vec<[usize; 3]>,
    },
    /// The move filled the board without completing a line.
    Tie,
}

impl RoundOutcome {
    /// Returns true if the move changed the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RoundOutcome::Ignored(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::GameOver.to_string(), "Game is already over");
        assert_eq!(
            Rejection::OutOfBounds(12).to_string(),
            "Position 12 is out of bounds (must be 0-8)"
        );
        assert_eq!(Rejection::Occupied(4).to_string(), "Square 4 is already occupied");
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Mark::O, 7).to_string(), "O -> 7");
    }
}
