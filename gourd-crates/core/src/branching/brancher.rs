#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::statistics::StatisticLogger;
use crate::Assignment;

/// A branching strategy (a decision builder), oftentimes built from a [`VariableSelector`] and a
/// [`ValueSelector`].
///
/// A brancher proposes the next [`Decision`] given the current domains, and returns [`None`] once
/// all the variables it is responsible for are fixed. Every alternative of a returned decision
/// must shrink the domain of its variable.
///
/// Branchers are expected to be deterministic given the domains, so that a search is reproducible.
pub trait Brancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision>;

    /// Called whenever the search backtracks to an earlier choice point.
    fn on_backtrack(&mut self) {}

    /// Called whenever a solution is recorded.
    fn on_solution(&mut self, _solution: &Assignment) {}

    /// Logs statistics of the brancher using the provided [`StatisticLogger`].
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        (**self).next_decision(context)
    }

    fn on_backtrack(&mut self) {
        (**self).on_backtrack()
    }

    fn on_solution(&mut self, solution: &Assignment) {
        (**self).on_solution(solution)
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        (**self).log_statistics(statistic_logger)
    }
}

impl<B: Brancher + ?Sized> Brancher for &mut B {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        (**self).next_decision(context)
    }

    fn on_backtrack(&mut self) {
        (**self).on_backtrack()
    }

    fn on_solution(&mut self, solution: &Assignment) {
        (**self).on_solution(solution)
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        (**self).log_statistics(statistic_logger)
    }
}
