//! Heuristic computer opponent playing White.
//!
//! The normal opponent looks exactly one move ahead: it takes an immediate
//! win, otherwise blocks an immediate Black win, otherwise plays the empty
//! cell nearest the centre. The easy opponent fills the first empty cell.

use super::error::MoveError;
use super::game::Game;
use super::rules::find_winning_line;
use super::types::{Point, Stone};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side the computer plays.
pub const AGENT_STONE: Stone = Stone::White;

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Fills the first empty cell in row-major order.
    Easy,
    /// Win, block, then play near the centre.
    #[default]
    Normal,
}

/// Chooses the computer's next move without playing it.
///
/// Returns `None` unless White is to move in an unfinished game with at least
/// one empty cell.
#[instrument(skip(game), fields(difficulty = %game.difficulty(), moves = game.moves()))]
pub fn pick_move(game: &Game) -> Option<Point> {
    if game.is_finished() || game.turn() != AGENT_STONE {
        return None;
    }

    let choice = match game.difficulty() {
        Difficulty::Easy => first_empty(game),
        Difficulty::Normal => completing_move(game, AGENT_STONE)
            .inspect(|p| debug!(%p, "Taking winning cell"))
            .or_else(|| {
                completing_move(game, AGENT_STONE.opponent())
                    .inspect(|p| debug!(%p, "Blocking opponent"))
            })
            .or_else(|| nearest_to_center(game)),
    };
    debug!(choice = ?choice, "Agent picked move");
    choice
}

/// Chooses and plays the computer's next move.
///
/// Returns the point played, or `None` when the agent had nothing to do.
#[instrument(skip(game))]
pub fn play(game: &mut Game) -> Result<Option<Point>, MoveError> {
    let Some(p) = pick_move(game) else {
        return Ok(None);
    };
    game.play(p)?;
    Ok(Some(p))
}

/// First empty cell, in row-major order, where `stone` would make five.
fn completing_move(game: &Game, stone: Stone) -> Option<Point> {
    let board = game.board();
    board
        .empty_points()
        .find(|&p| find_winning_line(board, p, stone).is_some())
}

fn first_empty(game: &Game) -> Option<Point> {
    game.board().empty_points().next()
}

/// Expanding square search around the centre cell.
fn nearest_to_center(game: &Game) -> Option<Point> {
    let board = game.board();
    let size = board.size() as i32;
    let center = Point::new(size / 2, size / 2);

    (0..size)
        .flat_map(|r| (-r..=r).flat_map(move |dy| (-r..=r).map(move |dx| (dx, dy))))
        .filter_map(|(dx, dy)| center.checked_offset(dx, dy))
        .find(|&p| board.is_empty_at(p))
}
