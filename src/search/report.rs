//! The result record handed to whoever presents the outcome of a search.

use crate::search::{Cost, SearchResult, SearchStatistics};
use serde::Serialize;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionReport {
    pub depth: usize,
    pub cost: Cost,
    pub moves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub nodes_popped: usize,
    pub nodes_expanded: usize,
    pub nodes_generated: usize,
    pub max_frontier_size: usize,
    pub solved: bool,
    pub solution: Option<SolutionReport>,
}

impl SearchReport {
    pub fn new(result: &SearchResult, statistics: &SearchStatistics) -> Self {
        let solution = match result {
            SearchResult::Success(plan) => Some(SolutionReport {
                depth: plan.len(),
                cost: plan.cost(),
                moves: plan.iter().map(|mv| mv.to_string()).collect(),
            }),
            SearchResult::ProvablyUnsolvable => None,
        };
        Self {
            nodes_popped: statistics.popped_nodes(),
            nodes_expanded: statistics.expanded_nodes(),
            nodes_generated: statistics.generated_nodes(),
            max_frontier_size: statistics.max_frontier_size(),
            solved: solution.is_some(),
            solution,
        }
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes Popped: {}", self.nodes_popped)?;
        writeln!(f, "Nodes Expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Nodes Generated: {}", self.nodes_generated)?;
        writeln!(f, "Max Fringe Size: {}", self.max_frontier_size)?;
        match &self.solution {
            Some(solution) => {
                writeln!(
                    f,
                    "Solution Found at depth {} with cost of {}.",
                    solution.depth, solution.cost
                )?;
                writeln!(f, "Steps:")?;
                for mv in &solution.moves {
                    writeln!(f, "\t{mv}")?;
                }
                Ok(())
            }
            None => writeln!(f, "No Solution"),
        }
    }
}
