use crate::search::{
    heuristics::{Chebyshev, Euclidean, Manhattan},
    Cell, Goals,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimated distance between two cells.
    fn distance(&self, from: Cell, to: Cell) -> HeuristicValue;

    /// Estimated distance from `cell` to the closest of `goals`. The default
    /// implementation takes the minimum of [`Heuristic::distance`] over the
    /// goals, and is zero when there are none.
    fn evaluate(&self, cell: Cell, goals: &Goals) -> HeuristicValue {
        goals
            .iter()
            .map(|goal| self.distance(cell, goal))
            .min()
            .unwrap_or(OrderedFloat(0.))
    }
}

#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Sum of the row and column differences.")]
    Manhattan,
    #[clap(help = "Straight-line distance.")]
    Euclidean,
    #[clap(help = "Largest of the row and column differences.")]
    Chebyshev,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(Manhattan::new()),
            HeuristicName::Euclidean => Box::new(Euclidean::new()),
            HeuristicName::Chebyshev => Box::new(Chebyshev::new()),
        }
    }
}
