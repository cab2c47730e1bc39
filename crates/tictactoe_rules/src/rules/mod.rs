//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They scan the whole board
//! and carry no notion of whose turn it is.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WIN_LINES, check_winner, winning_lines};
