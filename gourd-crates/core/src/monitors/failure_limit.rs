use std::ops::ControlFlow;

use super::SearchMonitor;
use crate::statistics::SearchStatistics;

/// A [`SearchMonitor`] which stops the search once `budget` nodes have failed.
#[derive(Clone, Copy, Debug)]
pub struct FailureLimit {
    budget: u64,
}

impl FailureLimit {
    pub fn new(budget: u64) -> Self {
        Self { budget }
    }
}

impl SearchMonitor for FailureLimit {
    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        if statistics.num_failures >= self.budget {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
