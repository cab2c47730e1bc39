//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Every line of three, row-major indices: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Mark> {
    let sq = board.get(a)?;
    if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
        sq.mark()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark owning the first completed line in table order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WIN_LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Returns every completed line, in table order.
///
/// A single move can complete two lines at once (e.g. a row and a
/// diagonal through the same cell); all of them are returned.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<[usize; 3]> {
    WIN_LINES
        .iter()
        .copied()
        .filter(|&line| line_owner(board, line).is_some())
        .collect()
}
