mod blank_moves;
mod successor_generator;

pub use blank_moves::BlankMoveGenerator;
pub use successor_generator::{Moves, SuccessorGenerator, SuccessorGeneratorName};
