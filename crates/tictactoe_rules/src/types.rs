//! Core domain types for tic-tac-toe.

use crate::action::Rejection;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// First mark, always assigned to player 1.
    X,
    /// Second mark, always assigned to player 2.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major squares.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Places a mark on an empty square.
    ///
    /// Squares only ever move from empty to occupied; clearing happens
    /// through [`Board::reset`].
    pub fn place(&mut self, pos: usize, mark: Mark) -> Result<(), Rejection> {
        match self.squares.get_mut(pos) {
            None => Err(Rejection::OutOfBounds(pos)),
            Some(Square::Occupied(_)) => Err(Rejection::Occupied(pos)),
            Some(square) => {
                *square = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Checks if a square is empty. Out-of-range positions are not empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(_)))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A participant: display name plus assigned mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name, used verbatim in status messages.
    #[new(into)]
    name: String,
    /// Mark this player places.
    mark: Mark,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with three in a row for this mark.
    Won(Mark),
    /// Board filled without a winning line.
    Tie,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_square() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::X).is_ok());
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        assert_eq!(board.place(0, Mark::O), Err(Rejection::Occupied(0)));
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(Rejection::OutOfBounds(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();
        board.reset();
        assert_eq!(board.occupied(), 0);
        assert!(board.is_empty(0));
    }

    #[test]
    fn test_display_shows_indices_and_marks() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Ann", Mark::X);
        assert_eq!(player.name(), "Ann");
        assert_eq!(*player.mark(), Mark::X);
    }
}
