//! A tile-weighted displacement estimate. Each misplaced tile contributes its
//! value times an approximation of how many cells it has to travel, derived
//! from the difference between its current and goal cell indices.

use crate::search::{
    board::{BOARD_SIZE, BOARD_WIDTH},
    Board, Heuristic, HeuristicValue,
};

/// Index pairs one apart that actually sit at opposite ends of adjacent rows.
const ROW_WRAP_PAIRS: [(usize, usize); 4] = [(2, 3), (3, 2), (5, 6), (6, 5)];

#[derive(Debug, Clone)]
pub struct WeightedDisplacement {
    /// Goal tiles in goal order
    goal_tiles: [u8; BOARD_SIZE],
    /// Goal cell of every tile value
    goal_positions: [usize; BOARD_SIZE],
}

impl WeightedDisplacement {
    pub fn new(goal: &Board) -> Self {
        Self {
            goal_tiles: *goal.tiles(),
            goal_positions: goal.positions(),
        }
    }

    fn displacement(goal_cell: usize, cell: usize) -> HeuristicValue {
        let diff = goal_cell.abs_diff(cell);
        let distance = if ROW_WRAP_PAIRS.contains(&(goal_cell, cell)) {
            diff + (goal_cell + cell) % BOARD_WIDTH
        } else {
            diff % BOARD_WIDTH + diff / BOARD_WIDTH
        };
        distance as HeuristicValue
    }
}

impl Heuristic for WeightedDisplacement {
    fn evaluate(&self, board: &Board) -> HeuristicValue {
        let positions = board.positions();
        self.goal_tiles
            .iter()
            .map(|&tile| {
                let goal_cell = self.goal_positions[tile as usize];
                Self::displacement(goal_cell, positions[tile as usize]) * tile as HeuristicValue
            })
            .sum()
    }
}
