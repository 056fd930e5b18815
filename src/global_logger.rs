// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide logger.
//!
//! Libraries and tests should construct a [`Logger`] and pass it to whoever logs.
//! Applications usually want one logger for the lifetime of the process; this
//! module is that ownership point.
//!
//! # Examples
//!
//! ```no_run
//! use grouplog::{global_logger, install_global_logger, Level, Logger};
//!
//! let logger = Logger::new();
//! logger.set_verbosity("core", Level::Verbose);
//! // Install early in main, before anything calls global_logger().
//! let _ = install_global_logger(logger);
//!
//! grouplog::info!(global_logger(), "started with {} workers", 4);
//! ```
//!
//! If nothing is installed, the first call to [`global_logger`] creates the
//! default: an empty registry writing to stderr. After that the global logger is
//! fixed; configure verbosity through [`Logger::registry`] instead of replacing
//! it.

use crate::error::Error;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, creating the default one if none was installed.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

/// Installs `logger` as the global logger.
///
/// Fails with [`Error::GlobalLoggerInstalled`] if a logger was already installed
/// or the default was already created by [`global_logger`].
pub fn install_global_logger(logger: Logger) -> Result<(), Error> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| Error::GlobalLoggerInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    // Every test in the crate shares this one global, so only one test touches it.
    #[test]
    fn install_once() {
        let first = install_global_logger(Logger::new());
        let logger = global_logger();
        logger.set_verbosity("core/global", Level::Debug);
        assert_eq!(
            global_logger().registry().get_verbosity("core/global/x"),
            Level::Debug
        );
        if first.is_ok() {
            assert!(matches!(
                install_global_logger(Logger::new()),
                Err(Error::GlobalLoggerInstalled)
            ));
        }
        assert!(std::ptr::eq(logger, global_logger()));
    }
}
