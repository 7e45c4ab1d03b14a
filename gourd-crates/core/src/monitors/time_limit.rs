use std::ops::ControlFlow;
use std::time::Duration;
use std::time::Instant;

use super::SearchMonitor;
use crate::statistics::SearchStatistics;

/// A [`SearchMonitor`] which stops the search once it has run for longer than its budget.
///
/// The budget is measured from the start of each search the monitor is used in.
#[derive(Clone, Copy, Debug)]
pub struct TimeLimit {
    started_at: Instant,
    budget: Duration,
}

impl TimeLimit {
    pub fn new(budget: Duration) -> TimeLimit {
        TimeLimit {
            started_at: Instant::now(),
            budget,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl SearchMonitor for TimeLimit {
    fn on_search_start(&mut self) {
        self.started_at = Instant::now();
    }

    fn on_checkpoint(&mut self, _statistics: &SearchStatistics) -> ControlFlow<()> {
        if self.started_at.elapsed() >= self.budget {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
