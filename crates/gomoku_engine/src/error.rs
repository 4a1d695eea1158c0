//! Error types for board and game operations.

use super::types::{Point, Stone};

/// Error returned when a move is rejected.
///
/// Every variant leaves the board and game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The point lies outside the grid.
    #[display("Point {} is outside the board", _0)]
    OutOfBounds(Point),

    /// The target cell already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Point),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The side to move is not a playable color.
    #[display("Invalid turn: {:?} cannot move", _0)]
    InvalidTurn(Stone),
}

impl MoveError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds(_) => "out_of_bounds",
            MoveError::CellOccupied(_) => "cell_occupied",
            MoveError::GameOver => "game_over",
            MoveError::InvalidTurn(_) => "invalid_turn",
        }
    }
}

impl std::error::Error for MoveError {}

/// Error returned when a board cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Size is zero or exceeds the maximum board size.
    #[display("Invalid board size {}", _0)]
    InvalidSize(#[error(not(source))] usize),
}
