use crate::search::{heuristics::Heuristic, heuristics::HeuristicValue, Cell};
use ordered_float::OrderedFloat;

/// Sum of absolute row and column differences. Admissible and consistent for
/// unit-cost four-way movement.
#[derive(Clone, Debug, Default)]
pub struct Manhattan {}

impl Manhattan {
    pub fn new() -> Self {
        Manhattan {}
    }
}

impl Heuristic for Manhattan {
    fn distance(&self, from: Cell, to: Cell) -> HeuristicValue {
        OrderedFloat(((from.row - to.row).abs() + (from.col - to.col).abs()) as f64)
    }
}
