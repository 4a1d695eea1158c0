//! Five-in-a-row detection.

use crate::board::Board;
use crate::types::{Point, Stone};
use tracing::instrument;

/// Number of stones that make a win.
pub const WINNING_RUN: usize = 5;

/// Axis directions in the order they are checked: horizontal, vertical,
/// diagonal down, diagonal up.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// The five points reported for a win.
pub type WinningLine = [Point; WINNING_RUN];

/// Checks whether `stone` at `point` completes five or more in a row.
///
/// Walks each direction in [`DIRECTIONS`] order from `point` both ways and
/// returns a five-point window of the first run of length five or more. For
/// longer runs the window is centred: `start = len / 2 - 2`, clamped to
/// `[0, len - 5]`.
///
/// The cell at `point` itself is never read, so an empty cell can be tested
/// as if `stone` were already there.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_line(board: &Board, point: Point, stone: Stone) -> Option<WinningLine> {
    if !board.in_bounds(point) {
        return None;
    }
    DIRECTIONS.iter().find_map(|&(dx, dy)| {
        let neg = collect_run(board, point, stone, -dx, -dy);
        let pos = collect_run(board, point, stone, dx, dy);

        let mut line = Vec::with_capacity(neg.len() + 1 + pos.len());
        line.extend(neg.into_iter().rev());
        line.push(point);
        line.extend(pos);

        highlight_window(&line)
    })
}

/// Consecutive points holding `stone`, starting next to `from` and moving by
/// `(dx, dy)`. Does not include `from`.
fn collect_run(board: &Board, from: Point, stone: Stone, dx: i32, dy: i32) -> Vec<Point> {
    std::iter::successors(from.checked_offset(dx, dy), |p| p.checked_offset(dx, dy))
        .take_while(|&p| board.get(p) == Ok(stone))
        .collect()
}

/// Picks the reported five points out of a full run.
fn highlight_window(line: &[Point]) -> Option<WinningLine> {
    let len = line.len();
    if len < WINNING_RUN {
        return None;
    }
    let start = (len / 2).saturating_sub(2).min(len - WINNING_RUN);
    line[start..start + WINNING_RUN].try_into().ok()
}
