use crate::search::{heuristics::Heuristic, heuristics::HeuristicValue, Cell};
use ordered_float::OrderedFloat;

#[derive(Clone, Debug, Default)]
pub struct Chebyshev {}

impl Chebyshev {
    pub fn new() -> Self {
        Chebyshev {}
    }
}

impl Heuristic for Chebyshev {
    fn distance(&self, from: Cell, to: Cell) -> HeuristicValue {
        OrderedFloat((from.row - to.row).abs().max((from.col - to.col).abs()) as f64)
    }
}
