//! Core domain types for gomoku.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    /// No stone.
    #[default]
    Empty,
    /// Black stone (moves first).
    Black,
    /// White stone, played by the computer opponent when one is enabled.
    White,
}

impl Stone {
    /// Returns the opposing color. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for the two colors that can take a turn.
    pub fn is_playable(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    /// Display glyph for this cell.
    pub fn glyph(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => '●',
            Stone::White => '○',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Zero-indexed board coordinate.
///
/// Coordinates are signed so that a negative request can be represented and
/// rejected as out of bounds instead of failing earlier at parse time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("({x}, {y})")]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point shifted by `(dx, dy)`, or `None` on overflow.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed five in a row.
    Won(Stone),
}

impl GameStatus {
    /// True once the game has a winner.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_colors() {
        assert_eq!(Stone::Black.opponent(), Stone::White);
        assert_eq!(Stone::White.opponent(), Stone::Black);
        assert_eq!(Stone::Empty.opponent(), Stone::Empty);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        use strum::IntoEnumIterator;
        let glyphs: std::collections::HashSet<char> = Stone::iter().map(Stone::glyph).collect();
        assert_eq!(glyphs.len(), 3);
        assert_eq!(Stone::Black.to_string(), "●");
    }

    #[test]
    fn test_checked_offset_overflow() {
        assert_eq!(Point::new(1, 2).checked_offset(-1, 1), Some(Point::new(0, 3)));
        assert_eq!(Point::new(i32::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Point::new(0, i32::MIN).checked_offset(0, -1), None);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (3, -1).into();
        assert_eq!(p, Point::new(3, -1));
        assert_eq!(p.to_string(), "(3, -1)");
    }
}
