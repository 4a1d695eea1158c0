//! Game rules for gomoku.
//!
//! Pure functions over board state, kept apart from board storage so the
//! game engine and the computer opponent share one definition of a win.

pub mod win;

pub use win::{DIRECTIONS, WINNING_RUN, WinningLine, find_winning_line};
