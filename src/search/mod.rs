mod cell;
mod config;
mod goals;
mod grid_map;
pub mod heuristics;
mod maze;
mod path;
mod report;
pub mod search_engines;
mod verbosity;

pub use cell::{Cell, Direction};
pub use config::{ConfigError, SearchConfig};
pub use goals::Goals;
pub use grid_map::{CellKind, GridMap};
pub use maze::{Maze, MazeError};
pub use path::{Path, PathStep};
pub use report::Report;
pub use verbosity::Verbosity;
