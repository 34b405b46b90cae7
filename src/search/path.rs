//! Routes produced by the search engines.

use crate::search::{search_engines::ParentRelation, Cell, Direction};
use itertools::Itertools;
use std::fmt;

/// One entry of a [`Path`]: a cell and the move taken *from* it to reach the
/// next entry. Only the final entry has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub cell: Cell,
    pub direction: Option<Direction>,
}

impl PathStep {
    pub const fn new(cell: Cell, direction: Option<Direction>) -> Self {
        Self { cell, direction }
    }
}

/// An ordered route from a start cell to a terminal cell. The last step is
/// always the terminal cell with no direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<PathStep>);

impl Path {
    /// The route that stays on `cell`.
    pub fn trivial(cell: Cell) -> Self {
        Self(vec![PathStep::new(cell, None)])
    }

    /// Follow the parent relation back from `terminal` to `start`.
    ///
    /// # Panics
    /// Panics if the predecessor chain does not reach `start` within as many
    /// steps as the relation has entries. That only happens when a search
    /// engine corrupted its own bookkeeping.
    pub fn reconstruct(start: Cell, terminal: Cell, parents: &ParentRelation) -> Self {
        let mut steps = vec![PathStep::new(terminal, None)];
        let mut current = terminal;
        let mut remaining = parents.len();
        while current != start {
            if remaining == 0 {
                panic!(
                    "parent relation does not lead from {} back to {}",
                    terminal, start
                );
            }
            remaining -= 1;
            let entry = parents
                .get(current)
                .and_then(|entry| entry.predecessor.zip(entry.direction));
            match entry {
                Some((predecessor, direction)) => {
                    steps.push(PathStep::new(predecessor, Some(direction)));
                    current = predecessor;
                }
                None => panic!("{} has no predecessor on the way back to {}", current, start),
            }
        }
        steps.reverse();
        Self(steps)
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn start(&self) -> Cell {
        self.0[0].cell
    }

    pub fn terminal(&self) -> Cell {
        self.0[self.0.len() - 1].cell
    }

    /// The moves of the route, without the terminal sentinel.
    pub fn directions(&self) -> Vec<Direction> {
        self.0.iter().filter_map(|step| step.direction).collect()
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether the route has no moves, i.e. the start already was a goal.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Continue this route with `next`, which must start where this one ends.
    /// The terminal sentinel of `self` is replaced by the steps of `next`.
    pub fn append(&mut self, next: Path) {
        assert_eq!(
            self.terminal(),
            next.start(),
            "appended path must continue from the current terminal cell"
        );
        self.0.pop();
        self.0.extend(next.0);
    }
}

impl fmt::Display for Path {
    /// Formats the moves as a bracketed list of quoted tokens, e.g.
    /// `['down', 'right']`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.directions()
                .into_iter()
                .map(|direction| format!("'{}'", direction))
                .join(", ")
        )
    }
}
