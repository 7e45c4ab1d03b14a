//! Contains structures related to the statistic logging of the [`Solver`] and the
//! [`LargeNeighbourhoodSearch`].
//!
//! Statistics are only written once [`configure_statistic_logging`] has been called; until then
//! every call to [`log_statistic`] is a no-op.
mod search_statistics;
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;

pub use search_statistics::SearchStatistics;
pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

#[cfg(doc)]
use crate::lns::LargeNeighbourhoodSearch;
#[cfg(doc)]
use crate::Solver;

/// A value which can be written with a [`StatisticLogger`].
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}
