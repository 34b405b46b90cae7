use crate::search::{heuristics::HeuristicValue, Cell, Direction, Path};
use std::collections::HashMap;

/// How a cell was first (or most cheaply) reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentEntry {
    /// `None` only for the start cell.
    pub predecessor: Option<Cell>,
    /// Move taken from the predecessor.
    pub direction: Option<Direction>,
    /// Accumulated path cost, for engines that track one.
    pub cost: Option<HeuristicValue>,
}

impl ParentEntry {
    fn root(cost: Option<HeuristicValue>) -> Self {
        Self {
            predecessor: None,
            direction: None,
            cost,
        }
    }
}

/// The search tree of one engine invocation, rooted at the start cell. Its
/// size is the node count reported to callers.
#[derive(Debug, Clone)]
pub struct ParentRelation {
    start: Cell,
    entries: HashMap<Cell, ParentEntry>,
}

impl ParentRelation {
    pub fn new(start: Cell) -> Self {
        Self {
            start,
            entries: HashMap::from([(start, ParentEntry::root(None))]),
        }
    }

    pub fn with_root_cost(start: Cell, cost: HeuristicValue) -> Self {
        Self {
            start,
            entries: HashMap::from([(start, ParentEntry::root(Some(cost)))]),
        }
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    /// Record (or overwrite) how `cell` is reached.
    pub fn insert(&mut self, cell: Cell, predecessor: Cell, direction: Direction) {
        self.entries.insert(
            cell,
            ParentEntry {
                predecessor: Some(predecessor),
                direction: Some(direction),
                cost: None,
            },
        );
    }

    pub fn insert_with_cost(
        &mut self,
        cell: Cell,
        predecessor: Cell,
        direction: Direction,
        cost: HeuristicValue,
    ) {
        self.entries.insert(
            cell,
            ParentEntry {
                predecessor: Some(predecessor),
                direction: Some(direction),
                cost: Some(cost),
            },
        );
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    pub fn get(&self, cell: Cell) -> Option<&ParentEntry> {
        self.entries.get(&cell)
    }

    pub fn cost(&self, cell: Cell) -> Option<HeuristicValue> {
        self.entries.get(&cell).and_then(|entry| entry.cost)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The route from the start cell to `terminal`.
    pub fn extract_path(&self, terminal: Cell) -> Path {
        Path::reconstruct(self.start, terminal, self)
    }
}
