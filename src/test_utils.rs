use crate::search::{Cell, Direction, GridMap, Maze, Path};

pub const SMALL_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/small.txt"
));

pub const MEDIUM_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/medium.txt"
));

pub const LARGE_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/large.txt"
));

pub const BLOCKED_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/blocked.txt"
));

pub const ALREADY_AT_GOAL_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/already_at_goal.txt"
));

pub const MULTI_GOAL_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/multi_goal.txt"
));

pub const PARTIAL_MULTI_GOAL_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/partial_multi_goal.txt"
));

pub fn load_maze(text: &str) -> Maze {
    Maze::from_text(text).expect("fixture maze should load")
}

/// The moves of `path` as their lowercase tokens.
pub fn directions_of(path: &Path) -> Vec<&'static str> {
    path.directions().into_iter().map(Into::into).collect()
}

/// Where `directions` lead when followed from `start`.
pub fn replay(start: Cell, directions: &[Direction]) -> Cell {
    directions
        .iter()
        .fold(start, |cell, &direction| cell.step(direction))
}

/// Panics unless every cell of `path` is free and consecutive cells are
/// adjacent in the stated direction.
pub fn assert_path_is_walkable(map: &GridMap, path: &Path) {
    for window in path.steps().windows(2) {
        let (from, to) = (window[0], window[1]);
        assert!(!map.is_wall(from.cell) && map.in_bounds(from.cell));
        let direction = from.direction.expect("only the last step has no direction");
        assert_eq!(from.cell.step(direction), to.cell);
    }
    assert!(!map.is_wall(path.terminal()) && map.in_bounds(path.terminal()));
}
