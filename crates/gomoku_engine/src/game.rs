//! Turn-based game state machine.

use super::agent::Difficulty;
use super::board::Board;
use super::error::{BoardError, MoveError};
use super::rules::{WinningLine, find_winning_line};
use super::types::{GameStatus, Point, Stone};
use tracing::{debug, info, instrument, warn};

/// A single game of gomoku.
///
/// Black moves first. Each accepted move either passes the turn or, when it
/// completes five in a row, freezes the game with a winner. A finished game
/// rejects every further move; start a new `Game` to play again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Stone,
    /// `Stone::Empty` until someone wins.
    winner: Stone,
    moves: u32,
    winning_line: Option<WinningLine>,
    difficulty: Difficulty,
}

impl Game {
    /// Creates a game on an empty `size`×`size` board with Black to move.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: Stone::Black,
            winner: Stone::Empty,
            moves: 0,
            winning_line: None,
            difficulty: Difficulty::default(),
        }
    }

    /// Plays the side to move at `p`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a winner is decided
    /// - [`MoveError::InvalidTurn`] if the turn holds a non-playable stone
    /// - [`MoveError::OutOfBounds`] / [`MoveError::CellOccupied`] from the board
    ///
    /// No state changes on error.
    #[instrument(skip(self), fields(turn = ?self.turn, moves = self.moves))]
    pub fn play(&mut self, p: Point) -> Result<(), MoveError> {
        if self.is_finished() {
            warn!(%p, "Move attempted after game over");
            return Err(MoveError::GameOver);
        }
        if !self.turn.is_playable() {
            return Err(MoveError::InvalidTurn(self.turn));
        }

        self.board.set(p, self.turn).inspect_err(|e| {
            warn!(%p, error = %e, "Move rejected");
        })?;
        self.moves += 1;

        // Only the last move can have created a new run.
        if let Some(line) = find_winning_line(&self.board, p, self.turn) {
            self.winner = self.turn;
            self.winning_line = Some(line);
            info!(winner = ?self.winner, moves = self.moves, "Game won");
            debug!("Final board:\n{}", self.board);
            return Ok(());
        }

        debug!(%p, stone = ?self.turn, moves = self.moves, "Move accepted");
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Meaningless once the game is finished.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Stone> {
        (self.winner != Stone::Empty).then_some(self.winner)
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(stone) => GameStatus::Won(stone),
            None => GameStatus::InProgress,
        }
    }

    /// True once a winner is set.
    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Number of accepted moves.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The five highlighted points of the winning run.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Strength of the computer opponent.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Sets the strength of the computer opponent.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}
