pub mod board;
pub mod heuristics;
mod plan;
mod report;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
pub mod successor_generators;
mod task;
mod trace;
mod transition;
mod validate;
mod verbosity;

pub use board::{Board, InvalidBoardError};
pub use heuristics::{Heuristic, HeuristicValue};
pub use plan::Plan;
pub use report::{SearchReport, SolutionReport};
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::{ReconstructionError, SearchSpace};
pub use search_statistics::SearchStatistics;
pub use successor_generators::SuccessorGenerator;
pub use task::Task;
pub use trace::{describe_node, trace_file_name, NoTrace, SearchTrace, TraceFile, TraceWriter};
pub use transition::{Cost, Direction, Move};
pub use validate::{validate, validate_result};
pub use verbosity::Verbosity;
