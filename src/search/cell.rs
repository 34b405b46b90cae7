//! Grid coordinates and the four moves between them.

use std::fmt;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// A `(row, column)` coordinate. Cells carry no state of their own, all search
/// bookkeeping is keyed by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step away in `direction`. The result is not checked
    /// against any grid.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move between orthogonally adjacent cells.
///
/// The declaration order is the expansion priority used by every search
/// engine: up, left, down, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// `(row, column)` offset of the move.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }
}
