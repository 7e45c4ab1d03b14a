//! Contains the structures corresponding to solution iterations.

use crate::basic_types::ModelError;
use crate::branching::Brancher;
use crate::engine::search::TreeSearch;
use crate::monitors::SearchMonitor;
use crate::results::SearchTermination;
use crate::statistics::SearchStatistics;
use crate::Assignment;
use crate::Solver;

/// Lazily produces the solutions of a search started with [`Solver::search`].
///
/// Solutions are produced in the order in which the search finds them; in an optimisation
/// problem, every next solution is strictly better than the previous one. Once the iterator
/// returns `None`, [`SolutionIterator::termination`] tells why the search ended.
///
/// When the iterator is dropped, the domains of the [`Solver`] are restored to the root.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'brancher, 'monitors, B: ?Sized, M: ?Sized> {
    solver: &'solver mut Solver,
    brancher: &'brancher mut B,
    monitors: &'monitors mut M,
    search: TreeSearch,
}

impl<'solver, 'brancher, 'monitors, B, M> SolutionIterator<'solver, 'brancher, 'monitors, B, M>
where
    B: Brancher + ?Sized,
    M: SearchMonitor + ?Sized,
{
    pub(crate) fn new(
        solver: &'solver mut Solver,
        brancher: &'brancher mut B,
        monitors: &'monitors mut M,
        search: TreeSearch,
    ) -> Self {
        SolutionIterator {
            solver,
            brancher,
            monitors,
            search,
        }
    }

    /// Runs the search until the next solution, or until the search ends.
    ///
    /// A [`ModelError`] ends the search.
    pub fn next_solution(&mut self) -> Result<Option<Assignment>, ModelError> {
        while !self.search.state().is_terminal() {
            let solution = self.search.step(
                &mut self.solver.store,
                &mut self.solver.engine,
                &mut *self.brancher,
                &mut *self.monitors,
            )?;

            if solution.is_some() {
                return Ok(solution);
            }
        }

        Ok(None)
    }

    /// Why the search ended, or `None` while it can still produce solutions.
    pub fn termination(&self) -> Option<SearchTermination> {
        self.search.state().termination()
    }

    pub fn statistics(&self) -> &SearchStatistics {
        self.search.statistics()
    }

    pub fn brancher(&self) -> &B {
        self.brancher
    }
}

impl<B, M> Iterator for SolutionIterator<'_, '_, '_, B, M>
where
    B: Brancher + ?Sized,
    M: SearchMonitor + ?Sized,
{
    type Item = Result<Assignment, ModelError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution().transpose()
    }
}

impl<B: ?Sized, M: ?Sized> Drop for SolutionIterator<'_, '_, '_, B, M> {
    fn drop(&mut self) {
        self.search.restore_root(&mut self.solver.store);
    }
}
