//! Loading maze files into searchable problem instances.

use crate::{
    parsed_types::{Coordinate, MazeDescription, WallRect},
    parsers::{ParseError, Parser},
    search::{Cell, CellKind, Goals, GridMap},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("failed to read maze file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed maze file at line {line}, column {column}: {message}")]
    Parse {
        line: u32,
        column: usize,
        message: String,
    },
    #[error("grid dimensions must be positive, got ({rows}, {cols})")]
    InvalidDimensions { rows: i64, cols: i64 },
    #[error("{role} cell ({}, {}) lies outside the grid", cell.0, cell.1)]
    CellOutOfBounds { role: &'static str, cell: Coordinate },
    #[error("wall {wall:?} does not fit inside the grid")]
    WallOutOfBounds { wall: WallRect },
}

impl MazeError {
    fn from_parse_error(error: nom::Err<ParseError>) -> Self {
        match error {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                // The error that got furthest into the input is the most
                // useful one to report
                let furthest = e
                    .errors
                    .iter()
                    .max_by_key(|(span, _)| span.location_offset());
                let context = e.errors.iter().rev().find_map(|(_, kind)| match kind {
                    nom_greedyerror::GreedyErrorKind::Context(context) => Some(*context),
                    _ => None,
                });
                match furthest {
                    Some((span, kind)) => MazeError::Parse {
                        line: span.location_line(),
                        column: span.get_utf8_column(),
                        message: match context {
                            Some(context) => format!("invalid {} ({:?})", context, kind),
                            None => format!("{:?}", kind),
                        },
                    },
                    None => MazeError::Parse {
                        line: 1,
                        column: 1,
                        message: "unrecognised input".to_string(),
                    },
                }
            }
            nom::Err::Incomplete(_) => MazeError::Parse {
                line: 1,
                column: 1,
                message: "unexpected end of input".to_string(),
            },
        }
    }
}

/// A loaded problem instance: the grid, where to start and where to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    map: GridMap,
    start: Cell,
    goals: Goals,
}

impl Maze {
    pub fn new(map: GridMap, start: Cell, goals: Goals) -> Self {
        Self { map, start, goals }
    }

    pub fn from_path(path: &Path) -> Result<Self, MazeError> {
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let maze = Self::from_text(&text)?;
        info!(
            path = %path.display(),
            rows = maze.map.rows(),
            cols = maze.map.cols(),
            goals = maze.goals.len(),
            "loaded maze"
        );
        Ok(maze)
    }

    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let description = MazeDescription::from_str(text).map_err(MazeError::from_parse_error)?;
        Self::from_description(&description)
    }

    /// Check a parsed description against its own dimensions and build the
    /// grid, marking every cell covered by a wall rectangle.
    pub fn from_description(description: &MazeDescription) -> Result<Self, MazeError> {
        let (rows, cols) = description.dimensions();
        if rows <= 0 || cols <= 0 || rows > i64::from(i32::MAX) || cols > i64::from(i32::MAX) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let inside = |(row, col): Coordinate| (0..rows).contains(&row) && (0..cols).contains(&col);
        let to_cell = |(row, col): Coordinate| Cell::new(row as i32, col as i32);

        if !inside(description.start()) {
            return Err(MazeError::CellOutOfBounds {
                role: "start",
                cell: description.start(),
            });
        }
        let mut goals = Goals::new();
        for &goal in description.goals() {
            if !inside(goal) {
                return Err(MazeError::CellOutOfBounds { role: "goal", cell: goal });
            }
            goals.insert(to_cell(goal));
        }
        for &wall in description.walls() {
            let fits = wall.width > 0
                && wall.height > 0
                && inside((wall.y, wall.x))
                && wall.height <= rows - wall.y
                && wall.width <= cols - wall.x;
            if !fits {
                return Err(MazeError::WallOutOfBounds { wall });
            }
        }

        let map = GridMap::from_fn(rows as i32, cols as i32, |cell| {
            let (row, col) = (i64::from(cell.row), i64::from(cell.col));
            let covered = description.walls().iter().any(|wall| {
                (wall.x..wall.x + wall.width).contains(&col)
                    && (wall.y..wall.y + wall.height).contains(&row)
            });
            if covered {
                CellKind::Wall
            } else {
                CellKind::Free
            }
        });

        Ok(Self::new(map, to_cell(description.start()), goals))
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }
}
