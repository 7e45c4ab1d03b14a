use std::ops::ControlFlow;

use log::info;

use super::SearchMonitor;
use crate::statistics::SearchStatistics;
use crate::Assignment;

/// A [`SearchMonitor`] which periodically reports the progress of the search through
/// [`log::info!`]. It never stops the search.
#[derive(Clone, Copy, Debug)]
pub struct SearchLog {
    period: u64,
    next_report: u64,
}

impl SearchLog {
    /// Report every `period` branches.
    pub fn new(period: u64) -> Self {
        let period = period.max(1);
        Self {
            period,
            next_report: period,
        }
    }
}

impl SearchMonitor for SearchLog {
    fn on_search_start(&mut self) {
        self.next_report = self.period;
        info!("Start search");
    }

    fn on_checkpoint(&mut self, statistics: &SearchStatistics) -> ControlFlow<()> {
        if statistics.num_branches >= self.next_report {
            info!(
                "{} branches, {} failures, {} solutions, {:.3}s",
                statistics.num_branches,
                statistics.num_failures,
                statistics.num_solutions,
                statistics.elapsed.as_secs_f64()
            );
            self.next_report = statistics.num_branches + self.period;
        }

        ControlFlow::Continue(())
    }

    fn on_solution(&mut self, solution: &Assignment) -> ControlFlow<()> {
        match solution.objective_value() {
            Some(objective_value) => info!("Solution with objective {objective_value}"),
            None => info!("Solution"),
        }

        ControlFlow::Continue(())
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        info!(
            "End search: {} branches, {} failures, {} solutions, {:.3}s",
            statistics.num_branches,
            statistics.num_failures,
            statistics.num_solutions,
            statistics.elapsed.as_secs_f64()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_never_stops_the_search() {
        let mut log = SearchLog::new(0);
        log.on_search_start();

        let statistics = SearchStatistics {
            num_branches: 5,
            ..Default::default()
        };

        assert!(log.on_checkpoint(&statistics).is_continue());
        assert_eq!(log.next_report, 6);
        assert!(log
            .on_solution(&Assignment::new([], Some(3)))
            .is_continue());
    }
}
