use std::ops::ControlFlow;

use super::SearchMonitor;
use crate::statistics::SearchStatistics;

/// A [`SearchMonitor`] which stops the search once it has applied `budget` decision
/// alternatives.
#[derive(Clone, Copy, Debug)]
pub struct BranchLimit {
    budget: u64,
}

impl BranchLimit {
    pub fn new(budget: u64) -> Self {
        Self { budget }
    }
}

impl SearchMonitor for BranchLimit {
    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        if statistics.num_branches >= self.budget {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_when_budget_is_reached() {
        let mut limit = BranchLimit::new(10);

        let below = SearchStatistics {
            num_branches: 9,
            ..Default::default()
        };
        let reached = SearchStatistics {
            num_branches: 10,
            ..Default::default()
        };

        assert!(limit.on_checkpoint(&below).is_continue());
        assert!(limit.on_checkpoint(&reached).is_break());
    }
}
