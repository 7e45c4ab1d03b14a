use std::time::Duration;

use super::Statistic;
use super::StatisticLogger;

/// The counters of a single search run. They are reset whenever a new search is started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of decision alternatives which were applied.
    pub num_branches: u64,
    /// The number of nodes at which propagation failed.
    pub num_failures: u64,
    pub num_solutions: u64,
    /// The number of propagator invocations.
    pub num_propagations: u64,
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// Adds the counters of `other` to `self`.
    pub fn accumulate(&mut self, other: &SearchStatistics) {
        self.num_branches += other.num_branches;
        self.num_failures += other.num_failures;
        self.num_solutions += other.num_solutions;
        self.num_propagations += other.num_propagations;
        self.elapsed += other.elapsed;
    }
}

impl Statistic for SearchStatistics {
    fn log(&self, statistic_logger: StatisticLogger) {
        self.num_branches
            .log(statistic_logger.attach_to_prefix("numBranches"));
        self.num_failures
            .log(statistic_logger.attach_to_prefix("numFailures"));
        self.num_solutions
            .log(statistic_logger.attach_to_prefix("numSolutions"));
        self.num_propagations
            .log(statistic_logger.attach_to_prefix("numPropagations"));
        Statistic::log(
            &self.elapsed.as_secs_f64(),
            statistic_logger.attach_to_prefix("timeSpentInSolverInSeconds"),
        );
    }
}
