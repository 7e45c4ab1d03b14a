//! A [`SearchMonitor`] observes a search and decides when it should stop.
//!
//! Monitors are consulted by the search at every checkpoint (before propagating a node and before
//! branching) and whenever a solution is recorded. Breaking at a checkpoint ends the search as
//! [`SearchTermination::TimedOut`], while breaking on a solution ends it as
//! [`SearchTermination::Stopped`].
//!
//! Several monitors can be combined with a tuple, an [`Option`] or a vector of boxed monitors:
//! ```rust
//! # use std::time::Duration;
//! # use gourd_core::monitors::BranchLimit;
//! # use gourd_core::monitors::SearchLog;
//! # use gourd_core::monitors::SearchMonitor;
//! # use gourd_core::monitors::TimeLimit;
//! let mut monitors: Vec<Box<dyn SearchMonitor>> = vec![
//!     Box::new(TimeLimit::new(Duration::from_secs(3))),
//!     Box::new(BranchLimit::new(100_000)),
//! ];
//! monitors.push(Box::new(SearchLog::new(500_000)));
//! ```
mod branch_limit;
mod failure_limit;
mod indefinite;
mod search_log;
mod solution_limit;
mod time_limit;

use std::ops::ControlFlow;

pub use branch_limit::BranchLimit;
pub use failure_limit::FailureLimit;
pub use indefinite::Indefinite;
pub use search_log::SearchLog;
pub use solution_limit::SolutionLimit;
pub use time_limit::TimeLimit;

#[cfg(doc)]
use crate::results::SearchTermination;
use crate::statistics::SearchStatistics;
use crate::Assignment;

/// An observer of the search which can request the search to stop.
pub trait SearchMonitor {
    /// Called once before the first node of a search is explored.
    fn on_search_start(&mut self) {}

    /// Called before a node is propagated and before a decision is requested.
    fn on_checkpoint(&mut self, _statistics: &SearchStatistics) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called whenever a solution is recorded.
    fn on_solution(&mut self, _solution: &Assignment) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once when the search reaches a terminal state.
    fn on_search_end(&mut self, _statistics: &SearchStatistics) {}
}

/// Breaks if either of the two results breaks.
fn either(first: ControlFlow<()>, second: ControlFlow<()>) -> ControlFlow<()> {
    if first.is_break() || second.is_break() {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

impl<M: SearchMonitor> SearchMonitor for Option<M> {
    fn on_search_start(&mut self) {
        if let Some(monitor) = self {
            monitor.on_search_start()
        }
    }

    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        match self {
            Some(monitor) => monitor.on_checkpoint(statistics),
            None => ControlFlow::Continue(()),
        }
    }

    fn on_solution(&mut self, solution: &Assignment) -> ControlFlow<()> {
        match self {
            Some(monitor) => monitor.on_solution(solution),
            None => ControlFlow::Continue(()),
        }
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        if let Some(monitor) = self {
            monitor.on_search_end(statistics)
        }
    }
}

// Both monitors are always notified, so that counting monitors stay accurate.
impl<A: SearchMonitor, B: SearchMonitor> SearchMonitor for (A, B) {
    fn on_search_start(&mut self) {
        self.0.on_search_start();
        self.1.on_search_start();
    }

    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        either(
            self.0.on_checkpoint(statistics),
            self.1.on_checkpoint(statistics),
        )
    }

    fn on_solution(&mut self, solution: &Assignment) -> ControlFlow<()> {
        either(self.0.on_solution(solution), self.1.on_solution(solution))
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        self.0.on_search_end(statistics);
        self.1.on_search_end(statistics);
    }
}

impl<M: SearchMonitor + ?Sized> SearchMonitor for Box<M> {
    fn on_search_start(&mut self) {
        (**self).on_search_start()
    }

    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        (**self).on_checkpoint(statistics)
    }

    fn on_solution(&mut self, solution: &Assignment) -> ControlFlow<()> {
        (**self).on_solution(solution)
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        (**self).on_search_end(statistics)
    }
}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    fn on_search_start(&mut self) {
        (**self).on_search_start()
    }

    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        (**self).on_checkpoint(statistics)
    }

    fn on_solution(&mut self, solution: &Assignment) -> ControlFlow<()> {
        (**self).on_solution(solution)
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        (**self).on_search_end(statistics)
    }
}

impl<M: SearchMonitor> SearchMonitor for Vec<M> {
    fn on_search_start(&mut self) {
        self.iter_mut().for_each(SearchMonitor::on_search_start);
    }

    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        self.iter_mut()
            .map(|monitor| monitor.on_checkpoint(statistics))
            .fold(ControlFlow::Continue(()), either)
    }

    fn on_solution(&mut self, solution: &Assignment) -> ControlFlow<()> {
        self.iter_mut()
            .map(|monitor| monitor.on_solution(solution))
            .fold(ControlFlow::Continue(()), either)
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        self.iter_mut()
            .for_each(|monitor| monitor.on_search_end(statistics));
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn pair_notifies_both_monitors_of_a_solution() {
        let mut monitors = (SolutionLimit::new(1), SolutionLimit::new(2));
        let solution = Assignment::new([], None);

        assert_eq!(monitors.on_solution(&solution), ControlFlow::Break(()));
        // The second limit has counted the first solution as well.
        assert_eq!(monitors.1.on_solution(&solution), ControlFlow::Break(()));
    }

    #[test]
    fn absent_monitor_never_breaks() {
        let mut monitor: Option<BranchLimit> = None;
        let statistics = SearchStatistics {
            num_branches: u64::MAX,
            ..Default::default()
        };

        assert_eq!(monitor.on_checkpoint(&statistics), ControlFlow::Continue(()));
    }

    #[test]
    fn vector_breaks_when_any_member_breaks() {
        let mut monitors: Vec<Box<dyn SearchMonitor>> =
            vec![Box::new(Indefinite), Box::new(FailureLimit::new(2))];

        let few_failures = SearchStatistics {
            num_failures: 1,
            ..Default::default()
        };
        let many_failures = SearchStatistics {
            num_failures: 2,
            ..Default::default()
        };

        assert_eq!(
            monitors.on_checkpoint(&few_failures),
            ControlFlow::Continue(())
        );
        assert_eq!(
            monitors.on_checkpoint(&many_failures),
            ControlFlow::Break(())
        );
    }
}
