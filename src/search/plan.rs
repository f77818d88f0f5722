//! A plan is the sequence of moves leading from the start board to the goal
//! board. This module provides the [`Plan`] struct, which represents a plan.

use crate::search::{Cost, Move};
use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Move>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Move>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Move] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total cost of the plan, the sum of the moved tile values.
    pub fn cost(&self) -> Cost {
        self.steps.iter().map(Move::cost).sum()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl IntoIterator for Plan {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
