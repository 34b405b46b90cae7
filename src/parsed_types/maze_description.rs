//! Contains the raw content of a maze file via the [`MazeDescription`] type.

/// A `(first, second)` pair as written in a maze file, before it is checked
/// against the grid.
pub type Coordinate = (i64, i64);

/// An axis aligned rectangle of walls. `x` is the column and `y` the row of
/// its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl WallRect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeDescription {
    dimensions: Coordinate,
    start: Coordinate,
    goals: Vec<Coordinate>,
    walls: Vec<WallRect>,
}

impl MazeDescription {
    pub const fn new(
        dimensions: Coordinate,
        start: Coordinate,
        goals: Vec<Coordinate>,
        walls: Vec<WallRect>,
    ) -> Self {
        Self {
            dimensions,
            start,
            goals,
            walls,
        }
    }

    /// `(rows, cols)`.
    pub const fn dimensions(&self) -> Coordinate {
        self.dimensions
    }

    /// `(row, col)`.
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    pub fn goals(&self) -> &[Coordinate] {
        &self.goals
    }

    pub fn walls(&self) -> &[WallRect] {
        &self.walls
    }
}
