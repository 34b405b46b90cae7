mod chebyshev;
mod euclidean;
mod heuristic;
mod manhattan;

pub use chebyshev::Chebyshev;
pub use euclidean::Euclidean;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::Manhattan;
