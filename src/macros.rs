// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site macros.
//!
//! Each macro captures `file!()` as the location and `line!()` as the line, then
//! calls [`Logger::log`](crate::Logger::log) with the formatted arguments. The
//! location decides the verbosity group, so a call in `src/net/peer.rs` belongs to
//! `core/src/net/peer`.
//!
//! The first argument is anything that derefs to a [`Logger`](crate::Logger):
//! a `&Logger`, an `Arc<Logger>`, or [`global_logger()`](crate::global_logger).
//!
//! ```no_run
//! use grouplog::{Level, Logger};
//!
//! let logger = Logger::new();
//!
//! grouplog::warn!(logger, "queue at {}%", 93);
//! grouplog::debug!(logger, "not shown at the default verbosity");
//! grouplog::log!(logger, Level::Error, "explicit level");
//! ```

/// Logs at an explicit [`Level`](crate::Level).
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        ($logger).log(
            $level,
            ::core::concat!(::core::line!()),
            ::core::file!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs at [`Level::Fatal`](crate::Level::Fatal) and exits the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+);
        ::core::unreachable!("fatal log returned")
    }};
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Whether a call at `level` from the current file would be emitted.
///
/// Useful to skip work that only feeds a log message.
#[macro_export]
macro_rules! log_enabled {
    ($logger:expr, $level:expr) => {
        ($logger).enabled($level, ::core::file!())
    };
}
