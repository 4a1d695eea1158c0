//! The single game hosted by a server process.

use derive_new::new;
use gomoku_engine::{BoardError, Difficulty, Game, MoveError, Point, Stone, agent};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Point-in-time view of the game, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length of the board.
    pub size: usize,
    /// Side to move.
    pub turn: Stone,
    /// Number of accepted moves.
    pub moves: u32,
    /// Cells by row (`board[y][x]`).
    pub board: Vec<Vec<Stone>>,
    /// Winner, once decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Stone>,
    /// Five highlighted points of the winning run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_line: Option<Vec<Point>>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let board = game.board();
        Self {
            size: board.size(),
            turn: game.turn(),
            moves: game.moves(),
            board: board.rows().map(<[Stone]>::to_vec).collect(),
            winner: game.winner(),
            winning_line: game.winning_line().map(|line| line.to_vec()),
        }
    }
}

/// Requested move coordinates.
///
/// Accepts any JSON integer that fits `i64` so that large values are
/// reported as out of bounds rather than as malformed JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

/// Saturates to the `i32` range; a saturated coordinate is never on a board.
fn clamp_coord(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

impl From<MoveRequest> for Point {
    fn from(req: MoveRequest) -> Self {
        Point::new(clamp_coord(req.x), clamp_coord(req.y))
    }
}

/// Owns the server's game behind a lock.
///
/// Every read and every move holds the lock until its snapshot is built, so
/// concurrent requests never observe a half-applied turn.
#[derive(Debug)]
pub struct GameSession {
    game: Mutex<Game>,
    opponent: Option<Difficulty>,
}

impl GameSession {
    /// Starts a fresh game. With an opponent, White is played by the computer.
    #[instrument]
    pub fn new(board_size: usize, opponent: Option<Difficulty>) -> Result<Self, BoardError> {
        let mut game = Game::new(board_size)?;
        if let Some(difficulty) = opponent {
            game.set_difficulty(difficulty);
        }
        info!(board_size, ?opponent, "Created game session");
        Ok(Self {
            game: Mutex::new(game),
            opponent,
        })
    }

    /// Difficulty of the computer opponent, if one is playing.
    pub fn opponent(&self) -> Option<Difficulty> {
        self.opponent
    }

    /// Returns the current state.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> GameSnapshot {
        let game = self.game.lock().await;
        GameSnapshot::from(&*game)
    }

    /// Plays the side to move at `p`, then lets the computer answer if it is
    /// enabled and now to move. Returns the state after both moves.
    #[instrument(skip(self))]
    pub async fn play(&self, p: Point) -> Result<GameSnapshot, MoveError> {
        let mut game = self.game.lock().await;
        game.play(p)?;
        info!(%p, moves = game.moves(), "Move accepted");

        if self.opponent.is_some() {
            match agent::play(&mut game) {
                Ok(Some(reply)) => info!(%reply, moves = game.moves(), "Opponent replied"),
                Ok(None) => {}
                // The agent only picks empty in-bounds cells of an open game.
                Err(e) => error!(error = %e, "Opponent move rejected"),
            }
        }

        Ok(GameSnapshot::from(&*game))
    }
}
