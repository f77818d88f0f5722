use crate::search::Board;

pub const CLASSIC_START_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/classic/start.txt"
));

pub const CLASSIC_GOAL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/classic/goal.txt"
));

pub const UNSOLVABLE_START_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/unsolvable/start.txt"
));

pub const UNSOLVABLE_GOAL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/unsolvable/goal.txt"
));

pub const CLASSIC_START_TILES: [u8; 9] = [2, 3, 6, 1, 0, 7, 4, 8, 5];
pub const CLASSIC_GOAL_TILES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// The goal used by most tests, with the blank in the centre.
pub const GOAL_TILES: [u8; 9] = [1, 2, 3, 4, 0, 5, 6, 7, 8];

/// One transposition away from [`GOAL_TILES`], so of the wrong parity.
pub const UNSOLVABLE_TILES: [u8; 9] = [2, 1, 3, 4, 0, 5, 6, 7, 8];

pub fn board(tiles: [u8; 9]) -> Board {
    Board::new(tiles).unwrap()
}

pub fn goal_board() -> Board {
    board(GOAL_TILES)
}

/// Move the blank of `board` through the given cells, each adjacent to the
/// previous one.
pub fn walk_blank(board: Board, cells: &[usize]) -> Board {
    cells.iter().fold(board, |board, &cell| {
        let blank = board.blank();
        assert!(
            blank.abs_diff(cell) == 3 || (blank.abs_diff(cell) == 1 && blank / 3 == cell / 3),
            "cell {cell} is not adjacent to the blank at {blank}"
        );
        board.swap(cell, blank)
    })
}

/// Boards reachable from [`goal_board`], in a fixed order.
pub fn solvable_starts() -> Vec<Board> {
    let walks: [&[usize]; 4] = [
        &[3, 0, 1, 2, 5, 8, 7, 4],
        &[1, 0, 3, 6, 7, 8, 5, 2, 1, 0],
        &[5, 2, 1, 4, 7, 6, 3, 4, 5, 8],
        &[7, 6, 3, 0, 1, 4, 5, 2],
    ];
    walks
        .iter()
        .map(|cells| walk_blank(goal_board(), cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_reach_expected_boards() {
        assert_eq!(
            solvable_starts(),
            vec![
                board([2, 3, 5, 1, 0, 8, 6, 4, 7]),
                board([0, 4, 1, 6, 2, 3, 7, 8, 5]),
                board([1, 5, 2, 7, 3, 8, 4, 6, 0]),
                board([2, 7, 0, 1, 5, 3, 4, 6, 8]),
            ]
        );
    }
}
