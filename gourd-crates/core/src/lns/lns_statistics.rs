use std::time::Duration;

use crate::statistics::SearchStatistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The statistics of a [`LargeNeighbourhoodSearch`](super::LargeNeighbourhoodSearch).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LnsStatistics {
    pub num_iterations: u64,
    /// The number of iterations which improved the incumbent.
    pub num_improvements: u64,
    /// The accumulated statistics of the searches of all iterations.
    pub search: SearchStatistics,
    pub elapsed: Duration,
}

impl Statistic for LnsStatistics {
    fn log(&self, statistic_logger: StatisticLogger) {
        self.num_iterations
            .log(statistic_logger.attach_to_prefix("numIterations"));
        self.num_improvements
            .log(statistic_logger.attach_to_prefix("numImprovements"));
        self.search.log(statistic_logger.attach_to_prefix("inner"));
        Statistic::log(
            &self.elapsed.as_secs_f64(),
            statistic_logger.attach_to_prefix("timeSpentInLnsInSeconds"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_search_statistics_are_logged_with_the_lns_statistics() {
        let statistics = LnsStatistics {
            num_iterations: 4,
            num_improvements: 2,
            elapsed: Duration::from_millis(250),
            ..Default::default()
        };

        statistics.log(StatisticLogger::new(["lns"]));
    }
}
