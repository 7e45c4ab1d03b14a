//! Writes statistics in the form `{PREFIX} {NAME}={VALUE}` to a configured writer.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistics are written; see [`configure_statistic_logging`].
pub struct StatisticOptions<'a> {
    // Printed in front of every statistic
    statistic_prefix: &'a str,
    // Printed once after a block of statistics
    after_statistics: Option<&'a str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl Debug for StatisticOptions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .field("statistics_writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions<'static>>> = OnceLock::new();

/// Enables statistic logging.
///
/// Every statistic is written as `{prefix} {name}={value}`, where the name is converted to
/// `casing` if one is provided. The `after` line can be written after a block of statistics
/// with [`log_statistic_postfix`]. When no writer is given, statistics go to stdout.
///
/// Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Writes the statistic `name` with `value`, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut statistic_options) = statistic_options_lock.write() else {
        return;
    };

    let name = match statistic_options.statistics_casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = statistic_options.statistic_prefix;

    if let Err(e) = writeln!(
        statistic_options.statistics_writer,
        "{prefix} {name}={value}"
    ) {
        debug!("Could not write statistic: {e}");
    }
}

/// Writes the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut statistic_options) = statistic_options_lock.write() else {
        return;
    };

    if let Some(post_fix) = statistic_options.after_statistics {
        if let Err(e) = writeln!(statistic_options.statistics_writer, "{post_fix}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
