use crate::search::{heuristics::Heuristic, heuristics::HeuristicValue, Cell};
use ordered_float::OrderedFloat;

/// Straight-line distance between cell coordinates.
#[derive(Clone, Debug, Default)]
pub struct Euclidean {}

impl Euclidean {
    pub fn new() -> Self {
        Euclidean {}
    }
}

impl Heuristic for Euclidean {
    fn distance(&self, from: Cell, to: Cell) -> HeuristicValue {
        let d_row = f64::from(from.row - to.row);
        let d_col = f64::from(from.col - to.col);
        OrderedFloat(d_row.hypot(d_col))
    }
}
