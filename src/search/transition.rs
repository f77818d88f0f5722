//! A transition is a single tile sliding into the blank. It records enough to
//! both apply the move and undo it when reconstructing a solution.

use serde::Serialize;
use std::fmt::{self, Display};
use strum_macros::Display as StrumDisplay;

/// The direction the moved tile travels (the blank travels the opposite way).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, Serialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

/// Cost of a move, which is the value of the tile that moved.
pub type Cost = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The value of the tile that slides
    tile: u8,
    /// Cell the tile occupies before the move, i.e. the blank afterwards
    from: usize,
    /// Cell the tile occupies after the move, i.e. the blank beforehand
    to: usize,
    direction: Direction,
}

impl Move {
    pub fn new(tile: u8, from: usize, to: usize, direction: Direction) -> Self {
        Self {
            tile,
            from,
            to,
            direction,
        }
    }

    pub fn tile(&self) -> u8 {
        self.tile
    }

    pub fn origin(&self) -> usize {
        self.from
    }

    pub fn destination(&self) -> usize {
        self.to
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline(always)]
    pub fn cost(&self) -> Cost {
        self.tile as Cost
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {} {}", self.tile, self.direction)
    }
}
