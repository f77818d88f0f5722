use crate::search::{successor_generators::BlankMoveGenerator, Board, Move};
use smallvec::SmallVec;
use std::fmt::Debug;

/// A board has at most four applicable moves.
pub type Moves = SmallVec<[Move; 4]>;

/// A successor generator is responsible for listing the moves applicable in a
/// board and producing the board each of them leads to.
pub trait SuccessorGenerator: Debug {
    /// Moves applicable in the given board, in the order successors must be
    /// generated.
    fn get_applicable_moves(&self, board: &Board) -> Moves;

    /// The board reached by applying `mv` to `board`.
    fn generate_successor(&self, board: &Board, mv: &Move) -> Board;

    /// The board `mv` was applied to, given the board it produced.
    fn generate_predecessor(&self, board: &Board, mv: &Move) -> Board;
}

#[derive(Debug, Clone, Copy, Default)]
pub enum SuccessorGeneratorName {
    /// Slide the tiles around the blank: left, up, right, then down.
    #[default]
    BlankMoves,
}

impl SuccessorGeneratorName {
    pub fn create(&self) -> Box<dyn SuccessorGenerator> {
        match self {
            SuccessorGeneratorName::BlankMoves => Box::new(BlankMoveGenerator::new()),
        }
    }
}
