//! The obstacle grid searched by every engine.

use crate::search::{Cell, Direction};
use std::fmt;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Free,
    Wall,
}

/// A fixed-size grid of free and blocked cells. Bounds are `[0, rows) x [0,
/// cols)`; the grid is never modified once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    rows: i32,
    cols: i32,
    cells: Vec<CellKind>,
}

impl GridMap {
    /// Build a grid by asking `kind` about every cell in row-major order.
    pub fn from_fn<F>(rows: i32, cols: i32, mut kind: F) -> Self
    where
        F: FnMut(Cell) -> CellKind,
    {
        assert!(rows >= 0 && cols >= 0, "grid dimensions must not be negative");
        let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(kind(Cell::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    /// A grid with no walls.
    pub fn open(rows: i32, cols: i32) -> Self {
        Self::from_fn(rows, cols, |_| CellKind::Free)
    }

    /// Build a grid from text rows where `#` marks a wall and any other
    /// character a free cell. All rows must have the same length.
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "grid rows must have equal length"
        );
        Self::from_fn(rows.len() as i32, cols as i32, |cell| {
            match rows[cell.row as usize].as_bytes()[cell.col as usize] {
                b'#' => CellKind::Wall,
                _ => CellKind::Free,
            }
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    /// Kind of an in-bounds cell, `None` outside the grid.
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        if self.in_bounds(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    /// Whether `cell` is blocked. Cells outside the grid are not walls, they
    /// are simply not part of it.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.kind(cell) == Some(CellKind::Wall)
    }

    /// Free, in-bounds cells adjacent to `cell` in up, left, down, right
    /// order, each paired with the move that reaches it.
    pub fn neighbours(
        &self,
        cell: Cell,
    ) -> impl DoubleEndedIterator<Item = (Cell, Direction)> + '_ {
        Direction::iter().filter_map(move |direction| {
            let next = cell.step(direction);
            (self.kind(next) == Some(CellKind::Free)).then_some((next, direction))
        })
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.row * self.cols + cell.col) as usize
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            for kind in row {
                let c = match kind {
                    CellKind::Free => '.',
                    CellKind::Wall => '#',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
