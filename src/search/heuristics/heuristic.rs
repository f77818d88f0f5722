use crate::search::Board;
use std::fmt::Debug;

/// Heuristic estimates are non-negative integers, in the same unit as move
/// costs.
pub type HeuristicValue = u32;

pub trait Heuristic: Debug {
    /// Estimate the cost of reaching the goal from the given board.
    fn evaluate(&self, board: &Board) -> HeuristicValue;

    /// Evaluate a batch of boards. The default implementation simply calls
    /// `evaluate` for each board sequentially.
    fn evaluate_batch(&self, boards: &[Board]) -> Vec<HeuristicValue> {
        boards.iter().map(|board| self.evaluate(board)).collect()
    }
}
