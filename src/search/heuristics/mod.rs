mod heuristic;
mod weighted_displacement;

pub use heuristic::{Heuristic, HeuristicValue};
pub use weighted_displacement::WeightedDisplacement;
