// SPDX-License-Identifier: MIT OR Apache-2.0

//! The formatter/emitter.
//!
//! A [`Logger`] owns the pieces one log call needs: the [`VerbosityRegistry`]
//! that decides whether the call is shown, the [`Clock`] for its timestamp, and
//! the [`Sink`]s it is written to. There are two ways in:
//!
//! - [`Logger::log`] takes a [`std::fmt::Arguments`], which is what the
//!   [`log!`](crate::log!) family of macros produce. The arguments are only
//!   rendered once the call has passed the verbosity filter.
//! - [`Logger::log_str`] takes a message that is already final. Remote records
//!   arrive this way, so text coming from the script engine is never treated as
//!   a template.
//!
//! Both end in the same routine, so filtering and layout are identical no matter
//! where a record came from.
//!
//! # Fatal
//!
//! A [`Level::Fatal`] call that passes the filter writes its line, asks every
//! sink to flush, and exits the process with status 1. Nothing after a fatal log
//! call runs.

use crate::group::group_from_identifier;
use crate::level::Level;
use crate::log_line::LogLine;
use crate::registry::VerbosityRegistry;
use crate::sink::Sink;
use crate::stderr_sink::StdErrSink;
use crate::sys::{Clock, ProcessClock};
use std::borrow::Cow;
use std::fmt::Arguments;
use std::sync::Arc;

/// Exit status used after a fatal line.
pub const FATAL_EXIT_STATUS: i32 = 1;

#[derive(Debug)]
pub struct Logger {
    registry: Arc<VerbosityRegistry>,
    clock: Arc<dyn Clock>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// A logger with an empty registry writing to stderr.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The registry this logger filters with.
    pub fn registry(&self) -> &Arc<VerbosityRegistry> {
        &self.registry
    }

    /// Shorthand for `self.registry().set_verbosity(group, level)`.
    pub fn set_verbosity(&self, group: &str, level: Level) {
        self.registry.set_verbosity(group, level);
    }

    /// Whether a call at `level` from `location` would be emitted.
    ///
    /// # Panics
    ///
    /// If `location` belongs to neither naming namespace, see
    /// [`group_from_identifier`].
    pub fn enabled(&self, level: Level, location: &str) -> bool {
        let group = group_from_identifier(location);
        level <= self.registry.get_verbosity(&group)
    }

    /// Logs a formatted message.
    ///
    /// `line` is a string because script call sites may report something that
    /// isn't a number.
    pub fn log(&self, level: Level, line: &str, location: &str, args: Arguments<'_>) {
        if !self.enabled(level, location) {
            return;
        }
        let message = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(args.to_string()),
        };
        self.emit(level, line, location, &message);
    }

    /// Logs a message verbatim, without template substitution.
    pub fn log_str(&self, level: Level, line: &str, location: &str, message: &str) {
        if !self.enabled(level, location) {
            return;
        }
        self.emit(level, line, location, message);
    }

    fn emit(&self, level: Level, line: &str, location: &str, message: &str) {
        let record = LogLine::new(
            level,
            self.clock.seconds_since_start(),
            location,
            line,
            message,
        );
        for sink in &self.sinks {
            let rendered = record.render(sink.is_terminal());
            sink.write_line(&record, &rendered);
        }
        if level == Level::Fatal {
            for sink in &self.sinks {
                sink.prepare_to_die();
            }
            std::process::exit(FATAL_EXIT_STATUS);
        }
    }
}

/// Builds a [`Logger`]. Anything not set gets the default: a fresh registry,
/// the process clock, and a single [`StdErrSink`].
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    registry: Option<Arc<VerbosityRegistry>>,
    clock: Option<Arc<dyn Clock>>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Shares an existing registry, e.g. one already filled from configuration.
    pub fn registry(mut self, registry: Arc<VerbosityRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Adds a sink. Lines go to every sink in the order they were added.
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Replaces all sinks added so far.
    pub fn sinks(mut self, sinks: Vec<Arc<dyn Sink>>) -> Self {
        self.sinks = sinks;
        self
    }

    pub fn build(self) -> Logger {
        let sinks = if self.sinks.is_empty() {
            vec![Arc::new(StdErrSink::new()) as Arc<dyn Sink>]
        } else {
            self.sinks
        };
        Logger {
            registry: self.registry.unwrap_or_default(),
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(ProcessClock::new())),
            sinks,
        }
    }
}

/*
Boilerplate notes for Logger:

- Debug: derived, every part is Debug.
- Default: same as new(), stderr and a fresh registry.
- Clone: NOT implemented. Sharing a logger means sharing it through Arc or the
  global logger; two loggers that secretly share a registry would be confusing.
- PartialEq/Eq/Hash: NOT implemented, no useful notion of equality.
- Send/Sync: automatic, every part is Send + Sync.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use crate::log_line::CONTINUATION_INDENT;

    #[derive(Debug)]
    struct FixedClock(f64);

    impl Clock for FixedClock {
        fn seconds_since_start(&self) -> f64 {
            self.0
        }
    }

    fn capture() -> (Logger, Arc<InMemorySink>) {
        let sink = Arc::new(InMemorySink::new());
        let logger = Logger::builder()
            .clock(Arc::new(FixedClock(2.25)))
            .sink(sink.clone())
            .build();
        (logger, sink)
    }

    #[test]
    fn default_verbosity_filters_debug() {
        let (logger, sink) = capture();
        logger.log_str(Level::Debug, "1", "net.c", "hidden");
        assert!(sink.is_empty());
        logger.log_str(Level::Error, "2", "net.c", "shown");
        assert_eq!(sink.drain_logs(), "[    2.250000] E: net.c:2: shown");
    }

    #[test]
    fn group_verbosity_applies_to_location() {
        let (logger, sink) = capture();
        logger.set_verbosity("core/net", Level::Debug);
        logger.set_verbosity("lua", Level::Error);
        logger.log_str(Level::Debug, "1", "net.c", "core detail");
        logger.log_str(Level::Warn, "9", "./rc.lua", "script warning");
        logger.log_str(Level::Error, "10", "./rc.lua", "script error");
        assert_eq!(
            sink.drain_lines(),
            vec![
                "[    2.250000] D: net.c:1: core detail".to_string(),
                "[    2.250000] E: ./rc.lua:10: script error".to_string(),
            ]
        );
    }

    #[test]
    fn formats_arguments() {
        let (logger, sink) = capture();
        logger.log(Level::Info, "5", "a.c", format_args!("{} + {} = {}", 1, 2, 3));
        assert_eq!(sink.drain_logs(), "[    2.250000] I: a.c:5: 1 + 2 = 3");
    }

    #[test]
    fn literal_messages_are_not_templates() {
        let (logger, sink) = capture();
        logger.log_str(Level::Info, "5", "a.lua", "{} stays {}");
        assert_eq!(sink.drain_logs(), "[    2.250000] I: a.lua:5: {} stays {}");
    }

    #[test]
    fn multiline_is_indented_and_plain() {
        let (logger, sink) = capture();
        logger.log_str(Level::Info, "3", "a.c", "first\nsecond");
        let logs = sink.drain_logs();
        assert_eq!(
            logs,
            format!("[    2.250000] I: a.c:3: first\n{CONTINUATION_INDENT}second")
        );
        assert!(!logs.contains('\x1b'));
    }

    #[test]
    fn terminal_sinks_get_styles() {
        let plain = Arc::new(InMemorySink::new());
        let styled = Arc::new(InMemorySink::with_terminal(true));
        let logger = Logger::builder()
            .clock(Arc::new(FixedClock(0.0)))
            .sinks(vec![plain.clone() as Arc<dyn Sink>, styled.clone() as Arc<dyn Sink>])
            .build();
        logger.log_str(Level::Warn, "8", "a.c", "\x1b[1mloud\x1b[0m");
        assert_eq!(plain.drain_logs(), "[    0.000000] W: a.c:8: loud");
        assert_eq!(
            styled.drain_logs(),
            "\x1b[33m[    0.000000] W: a.c:8: \x1b[1mloud\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn enabled_matches_emission() {
        let (logger, _sink) = capture();
        logger.set_verbosity("all", Level::Warn);
        assert!(logger.enabled(Level::Warn, "x.c"));
        assert!(!logger.enabled(Level::Info, "x.c"));
        assert!(logger.enabled(Level::Fatal, "x.lua"));
    }

    #[test]
    fn shared_registry() {
        let registry = Arc::new(VerbosityRegistry::new());
        let sink = Arc::new(InMemorySink::new());
        let logger = Logger::builder()
            .registry(registry.clone())
            .sink(sink.clone())
            .build();
        registry.set_verbosity("core", Level::Fatal);
        logger.log_str(Level::Error, "1", "a.c", "quiet now");
        assert!(sink.is_empty());
        assert!(Arc::ptr_eq(logger.registry(), &registry));
    }

    #[test]
    #[should_panic(expected = "exactly one native or script")]
    fn unknown_location_panics() {
        let (logger, _sink) = capture();
        logger.log_str(Level::Error, "1", "Makefile", "nope");
    }
}
