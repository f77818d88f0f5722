//! Graph search over boards with a closed set. Breadth-first, uniform-cost,
//! greedy best-first and A* search all run through this one engine; the
//! strategy only decides the priority each generated node receives.

use crate::search::{
    search_engines::{Frontier, SearchEngine, SearchEngineName, SearchResult},
    Heuristic, NodeId, ReconstructionError, SearchSpace, SearchStatistics, SearchTrace,
    SuccessorGenerator, Task,
};
use tracing::{info, trace};

#[derive(Debug, Clone, Copy)]
pub struct FrontierSearch {
    strategy: SearchEngineName,
}

impl FrontierSearch {
    pub fn new(strategy: SearchEngineName) -> Self {
        Self { strategy }
    }

    /// Expand a closed node, pushing every successor to the frontier. Returns
    /// the number of successors.
    fn expand(
        &self,
        node_id: NodeId,
        search_space: &mut SearchSpace,
        frontier: &mut Frontier,
        generator: &dyn SuccessorGenerator,
        heuristic: &dyn Heuristic,
        statistics: &mut SearchStatistics,
    ) -> usize {
        statistics.increment_expanded_nodes();
        let (board, g_value) = {
            let node = search_space.get_node(node_id);
            (*node.get_board(), node.get_g())
        };

        let moves = generator.get_applicable_moves(&board);
        let successors: Vec<_> = moves
            .iter()
            .map(|mv| generator.generate_successor(&board, mv))
            .collect();
        let h_values = heuristic.evaluate_batch(&successors);

        for ((mv, successor), h_value) in moves.iter().zip(successors).zip(h_values) {
            let f_value = self.strategy.priority(g_value + mv.cost(), h_value);
            let child_id = search_space.insert_node(successor, node_id, *mv, h_value, f_value);
            frontier.push(child_id, f_value);
        }
        statistics.increment_generated_nodes(moves.len());
        trace!(board = %board, successors = moves.len(), "expanded");

        moves.len()
    }

    /// Hand the frontier to the trace. A popped node that is still to be
    /// discarded is listed first, as it has not left the frontier yet.
    fn trace_frontier(
        trace: &mut dyn SearchTrace,
        search_space: &SearchSpace,
        frontier: &Frontier,
        head: Option<NodeId>,
    ) {
        if trace.wants_frontier() {
            let nodes: Vec<NodeId> = head.into_iter().chain(frontier.ordered()).collect();
            trace.frontier(search_space, &nodes);
        }
    }
}

impl SearchEngine for FrontierSearch {
    fn search(
        &mut self,
        task: &Task,
        generator: &dyn SuccessorGenerator,
        heuristic: &dyn Heuristic,
        trace: &mut dyn SearchTrace,
    ) -> Result<(SearchResult, SearchStatistics), ReconstructionError> {
        info!(strategy = %self.strategy, "running {}", self.strategy.description());
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new();
        let mut frontier = Frontier::new();

        let root_h = heuristic.evaluate(task.start());
        let root_f = self.strategy.priority(0, root_h);
        let root_id = search_space.insert_root(*task.start(), root_h, root_f);
        frontier.push(root_id, root_f);

        while let Some(node_id) = frontier.pop() {
            statistics.increment_popped_nodes();
            trace.generating(&search_space, node_id);
            let board = *search_space.get_node(node_id).get_board();

            if board == *task.goal() {
                search_space.close(node_id);
                trace.goal_reached(&search_space, node_id);
                let plan = search_space.extract_plan(node_id, generator)?;
                info!(plan_length = plan.len(), plan_cost = plan.cost(), "goal reached");
                statistics.finalise_search();
                trace.finished(&statistics);
                return Ok((SearchResult::Success(plan), statistics));
            }

            if search_space.is_closed(&board) {
                // the discarded node still counts towards the frontier
                statistics.register_frontier_size(frontier.len() + 1);
                trace.already_closed(&search_space, node_id);
                Self::trace_frontier(trace, &search_space, &frontier, Some(node_id));
                search_space.discard(node_id);
                continue;
            }

            search_space.close(node_id);
            let successors = self.expand(
                node_id,
                &mut search_space,
                &mut frontier,
                generator,
                heuristic,
                &mut statistics,
            );
            statistics.register_frontier_size(frontier.len());
            trace.expanded(&search_space, successors);
            Self::trace_frontier(trace, &search_space, &frontier, None);
        }

        debug_assert!(frontier.is_empty());
        info!("frontier exhausted");
        statistics.finalise_search();
        trace.finished(&statistics);
        Ok((SearchResult::ProvablyUnsolvable, statistics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        successor_generators::{BlankMoveGenerator, SuccessorGeneratorName},
        validate, Board, NoTrace, Plan,
    };
    use crate::test_utils::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn solve(start: Board, goal: Board, strategy: SearchEngineName) -> (SearchResult, SearchStatistics) {
        let task = Task::new(start, goal);
        strategy
            .search(&task, SuccessorGeneratorName::BlankMoves, &mut NoTrace)
            .unwrap()
    }

    fn solve_plan(start: Board, goal: Board, strategy: SearchEngineName) -> Plan {
        match solve(start, goal, strategy).0 {
            SearchResult::Success(plan) => plan,
            SearchResult::ProvablyUnsolvable => panic!("{strategy} found no plan"),
        }
    }

    fn labels(plan: &Plan) -> Vec<String> {
        plan.iter().map(|mv| mv.to_string()).collect()
    }

    /// (popped, expanded, generated, max frontier size)
    fn counters(statistics: &SearchStatistics) -> (usize, usize, usize, usize) {
        (
            statistics.popped_nodes(),
            statistics.expanded_nodes(),
            statistics.generated_nodes(),
            statistics.max_frontier_size(),
        )
    }

    #[test]
    fn start_equal_to_goal_solves_immediately() {
        for strategy in SearchEngineName::iter() {
            let (result, statistics) = solve(goal_board(), goal_board(), strategy);
            assert_eq!(result, SearchResult::Success(Plan::empty()));
            assert_eq!(counters(&statistics), (1, 0, 1, 1));
        }
    }

    #[test]
    fn single_move_instance() {
        let start = board([1, 2, 3, 4, 5, 0, 6, 7, 8]);
        let expected = [
            (SearchEngineName::Bfs, (2, 1, 4, 3)),
            (SearchEngineName::Ucs, (3, 2, 6, 4)),
            (SearchEngineName::Greedy, (2, 1, 4, 3)),
            (SearchEngineName::AStar, (2, 1, 4, 3)),
        ];
        for (strategy, expected_counters) in expected {
            let (result, statistics) = solve(start, goal_board(), strategy);
            let SearchResult::Success(plan) = result else {
                panic!("{strategy} found no plan");
            };
            assert_eq!(labels(&plan), vec!["Move 5 Right"]);
            assert_eq!(plan.cost(), 5);
            assert_eq!(counters(&statistics), expected_counters, "{strategy}");
        }
    }

    #[test]
    fn three_move_instance() {
        let start = board([2, 0, 3, 1, 4, 5, 6, 7, 8]);
        let expected = [
            (SearchEngineName::Bfs, (14, 9, 27, 15)),
            (SearchEngineName::Ucs, (11, 6, 18, 10)),
            (SearchEngineName::Greedy, (4, 3, 9, 6)),
            (SearchEngineName::AStar, (4, 3, 9, 6)),
        ];
        for (strategy, expected_counters) in expected {
            let (result, statistics) = solve(start, goal_board(), strategy);
            let SearchResult::Success(plan) = result else {
                panic!("{strategy} found no plan");
            };
            assert_eq!(
                labels(&plan),
                vec!["Move 2 Right", "Move 1 Up", "Move 4 Left"]
            );
            assert_eq!(plan.len(), 3);
            assert_eq!(plan.cost(), 7);
            assert_eq!(counters(&statistics), expected_counters, "{strategy}");
        }
    }

    #[test]
    fn classic_instance() {
        let start = board(CLASSIC_START_TILES);
        let goal = board(CLASSIC_GOAL_TILES);
        let optimal = vec![
            "Move 7 Left",
            "Move 5 Up",
            "Move 8 Right",
            "Move 7 Down",
            "Move 5 Left",
            "Move 6 Down",
            "Move 3 Right",
            "Move 2 Right",
            "Move 1 Up",
            "Move 4 Up",
            "Move 7 Left",
            "Move 8 Left",
        ];
        let expected = [
            (SearchEngineName::Bfs, (3585, 2149, 5767, 2183), 12, 63),
            (SearchEngineName::Ucs, (10781, 6068, 16523, 5835), 12, 63),
            (SearchEngineName::Greedy, (264, 138, 371, 108), 42, 191),
            (SearchEngineName::AStar, (97, 64, 173, 77), 12, 63),
        ];
        for (strategy, expected_counters, depth, cost) in expected {
            let (result, statistics) = solve(start, goal, strategy);
            let SearchResult::Success(plan) = result else {
                panic!("{strategy} found no plan");
            };
            assert_eq!(plan.len(), depth, "{strategy}");
            assert_eq!(plan.cost(), cost, "{strategy}");
            assert_eq!(counters(&statistics), expected_counters, "{strategy}");
            if strategy != SearchEngineName::Greedy {
                assert_eq!(labels(&plan), optimal, "{strategy}");
            }
        }
    }

    #[test]
    fn plans_are_valid_for_every_strategy() {
        let generator = BlankMoveGenerator::new();
        for start in solvable_starts() {
            let task = Task::new(start, goal_board());
            for strategy in SearchEngineName::iter() {
                let plan = solve_plan(start, goal_board(), strategy);
                assert_eq!(validate(&plan, &generator, &task), Ok(()), "{strategy}");
            }
        }
    }

    #[test]
    fn uniform_cost_and_a_star_agree_on_cost() {
        for start in solvable_starts() {
            let ucs = solve_plan(start, goal_board(), SearchEngineName::Ucs);
            let a_star = solve_plan(start, goal_board(), SearchEngineName::AStar);
            assert_eq!(ucs.cost(), a_star.cost());
        }
        let expected_costs = [34, 41, 50, 35];
        for (start, cost) in solvable_starts().into_iter().zip(expected_costs) {
            let ucs = solve_plan(start, goal_board(), SearchEngineName::Ucs);
            assert_eq!(ucs.cost(), cost);
        }
    }

    #[test]
    fn breadth_first_finds_shortest_plan() {
        let expected_lengths = [8, 10, 10, 8];
        for (start, length) in solvable_starts().into_iter().zip(expected_lengths) {
            let bfs = solve_plan(start, goal_board(), SearchEngineName::Bfs);
            assert_eq!(bfs.len(), length);
            for strategy in [SearchEngineName::Ucs, SearchEngineName::AStar] {
                assert!(bfs.len() <= solve_plan(start, goal_board(), strategy).len());
            }
        }
    }

    #[test]
    fn plan_walks_back_to_start() {
        let generator = BlankMoveGenerator::new();
        let start = board(CLASSIC_START_TILES);
        let goal = board(CLASSIC_GOAL_TILES);
        for strategy in SearchEngineName::iter() {
            let plan = solve_plan(start, goal, strategy);
            let reached = plan
                .iter()
                .rev()
                .fold(goal, |board, mv| generator.generate_predecessor(&board, mv));
            assert_eq!(reached, start, "{strategy}");
        }
    }

    /// Checks the closed set after every step and counts the events.
    #[derive(Default)]
    struct RecordingTrace {
        generating: usize,
        expanded: usize,
        already_closed: usize,
        goal_reached: usize,
        frontiers: usize,
        /// Node reported as already closed, expected at the head of the next
        /// frontier
        pending_duplicate: Option<NodeId>,
        duplicate_heads: usize,
    }

    impl RecordingTrace {
        fn check_closed(space: &SearchSpace) {
            let boards: HashSet<Board> = space.closed_nodes().map(|node| *node.get_board()).collect();
            assert_eq!(boards.len(), space.closed_len(), "board closed twice");
        }
    }

    impl SearchTrace for RecordingTrace {
        fn wants_frontier(&self) -> bool {
            true
        }

        fn generating(&mut self, _space: &SearchSpace, _node_id: NodeId) {
            self.generating += 1;
        }

        fn expanded(&mut self, space: &SearchSpace, _successors: usize) {
            Self::check_closed(space);
            self.expanded += 1;
        }

        fn already_closed(&mut self, space: &SearchSpace, node_id: NodeId) {
            assert!(space.is_closed(space.get_node(node_id).get_board()));
            self.pending_duplicate = Some(node_id);
            self.already_closed += 1;
        }

        fn goal_reached(&mut self, space: &SearchSpace, _node_id: NodeId) {
            Self::check_closed(space);
            self.goal_reached += 1;
        }

        fn frontier(&mut self, space: &SearchSpace, frontier: &[NodeId]) {
            if let Some(node_id) = self.pending_duplicate.take() {
                assert_eq!(frontier.first(), Some(&node_id));
                self.duplicate_heads += 1;
            }
            for &node_id in frontier {
                assert_eq!(
                    space.get_node(node_id).get_status(),
                    crate::search::SearchNodeStatus::Open
                );
            }
            self.frontiers += 1;
        }
    }

    #[test]
    fn trace_sees_every_step() {
        let task = Task::new(board([2, 0, 3, 1, 4, 5, 6, 7, 8]), goal_board());
        let mut trace = RecordingTrace::default();
        let (result, statistics) = SearchEngineName::Bfs
            .search(&task, SuccessorGeneratorName::BlankMoves, &mut trace)
            .unwrap();

        assert!(matches!(result, SearchResult::Success(_)));
        assert_eq!(trace.generating, statistics.popped_nodes());
        assert_eq!(trace.expanded, statistics.expanded_nodes());
        assert_eq!(
            trace.already_closed,
            statistics.popped_nodes() - statistics.expanded_nodes() - 1
        );
        assert_eq!(trace.goal_reached, 1);
        assert_eq!(trace.frontiers, trace.expanded + trace.already_closed);
        assert!(trace.already_closed > 0);
        assert_eq!(trace.duplicate_heads, trace.already_closed);
    }

    #[test]
    fn unsolvable_instance_exhausts_frontier() {
        let task = Task::from_text(UNSOLVABLE_START_TEXT, UNSOLVABLE_GOAL_TEXT).unwrap();
        assert_eq!(task.start(), &board(UNSOLVABLE_TILES));
        for strategy in [SearchEngineName::Bfs, SearchEngineName::AStar] {
            let (result, statistics) = strategy
                .search(&task, SuccessorGeneratorName::BlankMoves, &mut NoTrace)
                .unwrap();
            assert_eq!(result, SearchResult::ProvablyUnsolvable);
            // half of the 9! permutations are reachable
            assert_eq!(statistics.expanded_nodes(), 181_440);
            assert_eq!(statistics.popped_nodes(), 483_841);
            assert_eq!(statistics.generated_nodes(), 483_841);
        }
    }
}
