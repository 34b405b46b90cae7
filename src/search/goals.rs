use crate::search::Cell;
use std::collections::BTreeSet;

/// The set of target cells of a query. Membership is all that matters to the
/// engines; the ordered set only keeps iteration and `Debug` output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goals(BTreeSet<Cell>);

impl Goals {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn single(cell: Cell) -> Self {
        Self(BTreeSet::from([cell]))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Returns whether the cell was newly added.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.0.insert(cell)
    }

    /// Returns whether the cell was a goal.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.0.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Cell> for Goals {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
