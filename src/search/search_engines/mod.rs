mod frontier;
mod frontier_search;
mod search_engine;

use frontier::Frontier;
pub use frontier_search::FrontierSearch;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
