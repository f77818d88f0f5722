use crate::search::{
    heuristics::WeightedDisplacement,
    search_engines::FrontierSearch,
    successor_generators::{SuccessorGenerator, SuccessorGeneratorName},
    Cost, Heuristic, HeuristicValue, Plan, ReconstructionError, SearchStatistics, SearchTrace,
    Task,
};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The frontier ran empty, so the goal cannot be reached from the start
    ProvablyUnsolvable,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        task: &Task,
        generator: &dyn SuccessorGenerator,
        heuristic: &dyn Heuristic,
        trace: &mut dyn SearchTrace,
    ) -> Result<(SearchResult, SearchStatistics), ReconstructionError>;
}

/// The search strategies. They share one engine and differ only in the
/// priority used to order the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SearchEngineName {
    #[strum(serialize = "BFS")]
    Bfs,
    #[strum(serialize = "UCS")]
    Ucs,
    #[strum(serialize = "GREEDY")]
    Greedy,
    #[default]
    #[strum(serialize = "A*")]
    AStar,
}

impl SearchEngineName {
    /// Parse a method token, falling back to A* for anything unrecognised.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    /// Resolve the optional method and dump arguments of a run into the
    /// strategy and the dump flag. A method of `true` or `false` is the dump
    /// flag given in place of the method; an explicit dump argument always
    /// wins.
    pub fn from_arguments(method: Option<&str>, dump: Option<&str>) -> (Self, bool) {
        let is_true = |value: &str| value.eq_ignore_ascii_case("true");
        let mut strategy = Self::default();
        let mut dump_flag = false;
        if let Some(method) = method {
            if is_true(method) || method.eq_ignore_ascii_case("false") {
                dump_flag = is_true(method);
            } else {
                strategy = Self::from_token(method);
            }
        }
        if let Some(dump) = dump {
            dump_flag = is_true(dump);
        }
        (strategy, dump_flag)
    }

    /// Frontier priority of a node with path cost `g` and heuristic value `h`.
    #[inline(always)]
    pub fn priority(&self, g: Cost, h: HeuristicValue) -> HeuristicValue {
        match self {
            SearchEngineName::Bfs => 0,
            SearchEngineName::Ucs => g,
            SearchEngineName::Greedy => h,
            SearchEngineName::AStar => g + h,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchEngineName::Bfs => "Breadth First Search",
            SearchEngineName::Ucs => "Uniform Cost Search",
            SearchEngineName::Greedy => "Greedy Search",
            SearchEngineName::AStar => "A* Search",
        }
    }

    pub fn create(&self) -> impl SearchEngine {
        FrontierSearch::new(*self)
    }

    /// Run this strategy on `task` with the weighted displacement heuristic.
    pub fn search(
        &self,
        task: &Task,
        generator_name: SuccessorGeneratorName,
        trace: &mut dyn SearchTrace,
    ) -> Result<(SearchResult, SearchStatistics), ReconstructionError> {
        let generator = generator_name.create();
        let heuristic = WeightedDisplacement::new(task.goal());
        self.create()
            .search(task, generator.as_ref(), &heuristic, trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tokens_round_trip() {
        for name in SearchEngineName::iter() {
            assert_eq!(SearchEngineName::from_token(&name.to_string()), name);
        }
    }

    #[test]
    fn tokens_ignore_case() {
        assert_eq!(SearchEngineName::from_token("bfs"), SearchEngineName::Bfs);
        assert_eq!(SearchEngineName::from_token("Greedy"), SearchEngineName::Greedy);
        assert_eq!(SearchEngineName::from_token("a*"), SearchEngineName::AStar);
    }

    #[test]
    fn unknown_token_defaults_to_a_star() {
        assert_eq!(SearchEngineName::from_token("DFS"), SearchEngineName::AStar);
        assert_eq!(SearchEngineName::from_token(""), SearchEngineName::AStar);
        assert_eq!(SearchEngineName::default(), SearchEngineName::AStar);
    }

    #[test]
    fn arguments_without_method() {
        assert_eq!(
            SearchEngineName::from_arguments(None, None),
            (SearchEngineName::AStar, false)
        );
    }

    #[test]
    fn arguments_with_method_only() {
        assert_eq!(
            SearchEngineName::from_arguments(Some("bfs"), None),
            (SearchEngineName::Bfs, false)
        );
        assert_eq!(
            SearchEngineName::from_arguments(Some("DFS"), None),
            (SearchEngineName::AStar, false)
        );
    }

    #[test]
    fn dump_flag_in_method_position() {
        assert_eq!(
            SearchEngineName::from_arguments(Some("true"), None),
            (SearchEngineName::AStar, true)
        );
        assert_eq!(
            SearchEngineName::from_arguments(Some("FALSE"), None),
            (SearchEngineName::AStar, false)
        );
    }

    #[test]
    fn arguments_with_method_and_dump() {
        assert_eq!(
            SearchEngineName::from_arguments(Some("UCS"), Some("True")),
            (SearchEngineName::Ucs, true)
        );
        assert_eq!(
            SearchEngineName::from_arguments(Some("GREEDY"), Some("no")),
            (SearchEngineName::Greedy, false)
        );
        // unknown method with a dump argument still runs A*
        assert_eq!(
            SearchEngineName::from_arguments(Some("DFS"), Some("true")),
            (SearchEngineName::AStar, true)
        );
        // the explicit dump argument wins over one in method position
        assert_eq!(
            SearchEngineName::from_arguments(Some("true"), Some("false")),
            (SearchEngineName::AStar, false)
        );
    }

    #[test]
    fn priority_per_strategy() {
        assert_eq!(SearchEngineName::Bfs.priority(10, 4), 0);
        assert_eq!(SearchEngineName::Ucs.priority(10, 4), 10);
        assert_eq!(SearchEngineName::Greedy.priority(10, 4), 4);
        assert_eq!(SearchEngineName::AStar.priority(10, 4), 14);
    }
}
