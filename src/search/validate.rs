use crate::error::{Error, Result};
use crate::search::{search_engines::SearchResult, Plan, SuccessorGenerator, Task};

/// Replay `plan` from the start board of `task`, checking that every move is
/// applicable and that the goal board is reached.
pub fn validate(
    plan: &Plan,
    generator: &dyn SuccessorGenerator,
    task: &Task,
) -> std::result::Result<(), String> {
    let mut cur_board = *task.start();
    for (step, mv) in plan.iter().enumerate() {
        let applicable_moves = generator.get_applicable_moves(&cur_board);

        if !applicable_moves.contains(mv) {
            return Err(format!(
                "{} (step {}) is not applicable in board {}",
                mv,
                step + 1,
                cur_board
            ));
        }

        cur_board = generator.generate_successor(&cur_board, mv);
    }

    if cur_board != *task.goal() {
        return Err(format!(
            "Plan does not reach the goal board, final board is: {}",
            cur_board
        ));
    }

    Ok(())
}

/// Validate the plan of a successful search. An invalid plan is an
/// [`Error::InvalidPlan`]; an unsolvable result has nothing to check.
pub fn validate_result(
    result: &SearchResult,
    generator: &dyn SuccessorGenerator,
    task: &Task,
) -> Result<()> {
    match result {
        SearchResult::Success(plan) => validate(plan, generator, task).map_err(Error::InvalidPlan),
        SearchResult::ProvablyUnsolvable => Ok(()),
    }
}
