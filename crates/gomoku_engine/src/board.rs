//! Square gomoku board with bounds-checked cell access.

use super::error::{BoardError, MoveError};
use super::types::{Point, Stone};
use tracing::instrument;

/// Side length of the standard board.
pub const STANDARD_SIZE: usize = 15;

/// Largest accepted side length.
pub const MAX_SIZE: usize = 1024;

/// Square grid of stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells in row-major order (index = y * size + x).
    cells: Vec<Stone>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero or larger than
    /// [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `p` lies on the board.
    pub fn in_bounds(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Returns the stone at `p`.
    pub fn get(&self, p: Point) -> Result<Stone, MoveError> {
        self.index(p)
            .map(|i| self.cells[i])
            .ok_or(MoveError::OutOfBounds(p))
    }

    /// Places `stone` at `p`.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] outside the grid, [`MoveError::CellOccupied`]
    /// if the cell is not empty. The board is unchanged on error.
    pub fn set(&mut self, p: Point, stone: Stone) -> Result<(), MoveError> {
        let i = self.index(p).ok_or(MoveError::OutOfBounds(p))?;
        if self.cells[i] != Stone::Empty {
            return Err(MoveError::CellOccupied(p));
        }
        self.cells[i] = stone;
        Ok(())
    }

    /// True if the cell at `p` is on the board and empty.
    pub fn is_empty_at(&self, p: Point) -> bool {
        matches!(self.get(p), Ok(Stone::Empty))
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Iterates over rows from `y = 0` downwards.
    pub fn rows(&self) -> impl Iterator<Item = &[Stone]> {
        self.cells.chunks(self.size)
    }

    /// All points in row-major order (y outer, x inner).
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        // size <= MAX_SIZE, checked in `new`
        let n = self.size as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Point::new(x, y)))
    }

    /// Empty points in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&p| self.is_empty_at(p))
    }

    fn index(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: STANDARD_SIZE,
            cells: vec![Stone::Empty; STANDARD_SIZE * STANDARD_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, stone) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{stone}")?;
            }
        }
        Ok(())
    }
}
