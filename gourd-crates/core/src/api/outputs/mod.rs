pub mod solution_iterator;

use crate::Assignment;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A solution was found.
    Satisfiable(Assignment),
    /// The search space was exhausted without finding a solution.
    Unsatisfiable,
    /// A monitor stopped the search before a solution was found.
    Unknown,
}

/// The result of a call to [`Solver::optimise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimisationResult {
    /// The best solution, proven optimal by exhausting the search space.
    Optimal(Assignment),
    /// The best solution found before a monitor stopped the search.
    Satisfiable(Assignment),
    /// There is no solution.
    Unsatisfiable,
    /// A monitor stopped the search before a solution was found.
    Unknown,
}

impl OptimisationResult {
    /// The best solution found, if any.
    pub fn solution(&self) -> Option<&Assignment> {
        match self {
            OptimisationResult::Optimal(solution) | OptimisationResult::Satisfiable(solution) => {
                Some(solution)
            }
            OptimisationResult::Unsatisfiable | OptimisationResult::Unknown => None,
        }
    }
}

/// The reason a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTermination {
    /// The whole search space (under the objective bound) was explored.
    Exhausted,
    /// A monitor aborted the search at a checkpoint, e.g. because of a time limit.
    TimedOut,
    /// A monitor asked to stop after a solution, or the search was aborted by a model error.
    Stopped,
}
