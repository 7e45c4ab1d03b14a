use std::ops::ControlFlow;

use super::SearchMonitor;
use crate::Assignment;

/// A [`SearchMonitor`] which stops the search after `limit` solutions have been recorded; a limit
/// of one gives a first-solution search.
#[derive(Clone, Copy, Debug)]
pub struct SolutionLimit {
    limit: u64,
    num_solutions: u64,
}

impl SolutionLimit {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            num_solutions: 0,
        }
    }
}

impl SearchMonitor for SolutionLimit {
    fn on_search_start(&mut self) {
        self.num_solutions = 0;
    }

    fn on_solution(&mut self, _solution: &Assignment) -> ControlFlow<()> {
        self.num_solutions += 1;

        if self.num_solutions >= self.limit {
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
    fn counter_is_reset_for_every_search() {
        let mut limit = SolutionLimit::new(2);
        let solution = Assignment::new([], None);

        assert!(limit.on_solution(&solution).is_continue());
        assert!(limit.on_solution(&solution).is_break());

        limit.on_search_start();
        assert!(limit.on_solution(&solution).is_continue());
    }
}
