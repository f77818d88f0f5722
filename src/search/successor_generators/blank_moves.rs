//! Generates successors by sliding a neighbouring tile into the blank.

use crate::search::{
    board::{above, below, left_of, right_of},
    successor_generators::{Moves, SuccessorGenerator},
    Board, Direction, Move,
};

/// Neighbours of the blank in generation order, each paired with the
/// direction the tile travels when it slides into the blank.
const NEIGHBOURS: [(fn(usize) -> Option<usize>, Direction); 4] = [
    (left_of, Direction::Right),
    (above, Direction::Down),
    (right_of, Direction::Left),
    (below, Direction::Up),
];

#[derive(Debug, Clone, Default)]
pub struct BlankMoveGenerator {}

impl BlankMoveGenerator {
    pub fn new() -> Self {
        Self {}
    }
}

impl SuccessorGenerator for BlankMoveGenerator {
    fn get_applicable_moves(&self, board: &Board) -> Moves {
        let blank = board.blank();
        NEIGHBOURS
            .iter()
            .filter_map(|(neighbour, direction)| {
                neighbour(blank).map(|cell| Move::new(board[cell], cell, blank, *direction))
            })
            .collect()
    }

    fn generate_successor(&self, board: &Board, mv: &Move) -> Board {
        debug_assert_eq!(board.blank(), mv.destination());
        debug_assert_eq!(board[mv.origin()], mv.tile());
        board.swap(mv.origin(), mv.destination())
    }

    fn generate_predecessor(&self, board: &Board, mv: &Move) -> Board {
        debug_assert_eq!(board.blank(), mv.origin());
        debug_assert_eq!(board[mv.destination()], mv.tile());
        board.swap(mv.destination(), mv.origin())
    }
}
