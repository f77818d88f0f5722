//! The 3x3 sliding puzzle board. A [`Board`] is a flat, row-major arrangement
//! of the tiles `1..=8` and the blank `0`.

use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::Index;
use thiserror::Error;

/// Number of cells on a board.
pub const BOARD_SIZE: usize = 9;
/// Number of cells in a row (and rows on a board).
pub const BOARD_WIDTH: usize = 3;
/// The value denoting the blank cell.
pub const BLANK: u8 = 0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("expected 9 tiles, got {got}")]
    WrongLength { got: usize },
    #[error("tile {tile} at cell {cell} is outside 0..=8")]
    TileOutOfRange { tile: u8, cell: usize },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },
    #[error("board has no blank cell")]
    MissingBlank,
}

/// An immutable board. Every transformation returns a new board, so boards can
/// be freely copied into search nodes and used as hash map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; BOARD_SIZE],
    blank: usize,
}

impl Board {
    pub fn new(tiles: [u8; BOARD_SIZE]) -> Result<Self, InvalidBoardError> {
        let mut seen = [false; BOARD_SIZE];
        for (cell, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(InvalidBoardError::TileOutOfRange { tile, cell })?;
            if *slot {
                return Err(InvalidBoardError::DuplicateTile { tile });
            }
            *slot = true;
        }
        // Unreachable once the tiles are distinct and in range.
        let blank = tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or(InvalidBoardError::MissingBlank)?;

        Ok(Self { tiles, blank })
    }

    pub fn from_slice(tiles: &[u8]) -> Result<Self, InvalidBoardError> {
        let tiles: [u8; BOARD_SIZE] = tiles
            .try_into()
            .map_err(|_| InvalidBoardError::WrongLength { got: tiles.len() })?;
        Self::new(tiles)
    }

    pub fn tiles(&self) -> &[u8; BOARD_SIZE] {
        &self.tiles
    }

    /// Index of the blank cell.
    #[inline(always)]
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Index of every tile value, i.e. the inverse permutation of the board.
    pub fn positions(&self) -> [usize; BOARD_SIZE] {
        let mut positions = [0; BOARD_SIZE];
        for (cell, &tile) in self.tiles.iter().enumerate() {
            positions[tile as usize] = cell;
        }
        positions
    }

    /// Return a new board with the contents of cells `a` and `b` exchanged.
    pub fn swap(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(a, b);
        let blank = if tiles[a] == BLANK {
            a
        } else if tiles[b] == BLANK {
            b
        } else {
            self.blank
        };
        Self { tiles, blank }
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, cell: usize) -> &Self::Output {
        &self.tiles[cell]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tiles.iter().join(", "))
    }
}

#[inline(always)]
pub fn left_of(cell: usize) -> Option<usize> {
    (cell % BOARD_WIDTH != 0).then(|| cell - 1)
}

#[inline(always)]
pub fn right_of(cell: usize) -> Option<usize> {
    (cell % BOARD_WIDTH != BOARD_WIDTH - 1).then(|| cell + 1)
}

#[inline(always)]
pub fn above(cell: usize) -> Option<usize> {
    (cell >= BOARD_WIDTH).then(|| cell - BOARD_WIDTH)
}

#[inline(always)]
pub fn below(cell: usize) -> Option<usize> {
    (cell < BOARD_SIZE - BOARD_WIDTH).then(|| cell + BOARD_WIDTH)
}
