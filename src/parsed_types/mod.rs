//! Types produced by the parsers, mirroring the maze file layout.

mod maze_description;

pub use maze_description::{Coordinate, MazeDescription, WallRect};
