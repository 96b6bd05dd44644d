// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fmt;

use thiserror::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::LogLevel;

/// Target every MathLib message is emitted under.
pub const LOGGER_TARGET: &str = "mathlib";

/// Local timestamp with milliseconds, printed before the level and message:
/// `2024-01-31 12:00:00.123  INFO MathLib logger initialized`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("A global logger has already been installed")]
    AlreadyInitialized,

    #[error("Unknown log level '{0}'. Expected one of trace, debug, info, warn, error")]
    InvalidLevel(String),
}

/// Console logger for the math library, backed by `tracing`.
///
/// ```no_run
/// use mathlib_logger::{log_info, log_warn, LogLevel, Logger};
///
/// Logger::init(LogLevel::Debug).unwrap();
/// log_info!("Computing square of {}", 5.0);
/// log_warn!("Large value detected: {}", 1e100);
/// ```
pub struct Logger;

impl Logger {
    /// Installs the global subscriber and filters out anything below `level`.
    ///
    /// Output goes to stderr so stdout stays free for results. Only the first call in a
    /// process succeeds.
    pub fn init(level: LogLevel) -> Result<(), LoggerError> {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(LevelFilter::from(level))
            .try_init()
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        info!(target: LOGGER_TARGET, "MathLib logger initialized");
        Ok(())
    }

    pub fn debug(args: fmt::Arguments<'_>) {
        debug!(target: LOGGER_TARGET, "{}", args);
    }

    pub fn info(args: fmt::Arguments<'_>) {
        info!(target: LOGGER_TARGET, "{}", args);
    }

    pub fn warn(args: fmt::Arguments<'_>) {
        warn!(target: LOGGER_TARGET, "{}", args);
    }

    pub fn error(args: fmt::Arguments<'_>) {
        error!(target: LOGGER_TARGET, "{}", args);
    }
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::Logger::debug(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::Logger::info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::Logger::warn(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::Logger::error(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_methods_format_positional_arguments() {
        Logger::info(format_args!("Computing square of {}", 5.0));
        Logger::warn(format_args!("Large value detected: {}", 1e100));
        Logger::error(format_args!("Invalid input: {}", -1));
        Logger::debug(format_args!("Processed value: {} -> {}", 2, 4));

        assert!(logs_contain("Computing square of 5"));
        assert!(logs_contain("Large value detected: 10000000000"));
        assert!(logs_contain("Invalid input: -1"));
        assert!(logs_contain("Processed value: 2 -> 4"));
    }

    #[test]
    #[traced_test]
    fn test_macros_forward_to_logger() {
        let n = 10;
        crate::log_info!("Computing factorial of {}", n);
        crate::log_debug!("Configuration: {name}", name = "MathLib");
        crate::log_error!("failed: {n}");

        assert!(logs_contain("Computing factorial of 10"));
        assert!(logs_contain("Configuration: MathLib"));
        assert!(logs_contain("failed: 10"));
    }

    #[test]
    #[traced_test]
    fn test_levels_are_recorded() {
        crate::log_warn!("watch out");
        assert!(logs_contain("WARN"));
    }
}
