// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A [`Sink`] that keeps rendered lines in memory instead of writing them out.
//! It exists mostly for tests: inject it into a [`crate::Logger`], make some log
//! calls, then inspect exactly what would have been printed.
//!
//! The sink can pretend to be a terminal so the styled rendering can be checked
//! as well.

use crate::log_line::LogLine;
use crate::sink::Sink;
use std::sync::{Mutex, PoisonError};

/// A sink that stores rendered lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use grouplog::{InMemorySink, Level, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::builder().sink(sink.clone()).build();
///
/// logger.log_str(Level::Warn, "12", "net.c", "slow peer");
/// logger.log_str(Level::Debug, "13", "net.c", "suppressed at the default verbosity");
///
/// let logs = sink.drain_logs();
/// assert!(logs.ends_with("W: net.c:12: slow peer"));
/// assert!(!logs.contains("suppressed"));
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    logs: Mutex<Vec<String>>,
    interactive: bool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by Sink
// - Default: an empty, non-terminal sink
// - Clone: NOT implemented - two handles on one buffer is what Arc is for
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is racy
// - Send/Sync: automatic through Mutex

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// Creates an empty sink that receives plain (unstyled) lines.
    pub fn new() -> Self {
        Self::with_terminal(false)
    }

    /// Creates an empty sink that reports `interactive` from [`Sink::is_terminal`].
    pub fn with_terminal(interactive: bool) -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
            interactive,
        }
    }

    /// Drains all lines into a single string joined by newlines, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        let result = logs.join("\n");
        logs.clear();
        result
    }

    /// Drains all lines, clearing the buffer.
    pub fn drain_lines(&self) -> Vec<String> {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *logs)
    }

    /// Number of lines currently held.
    pub fn len(&self) -> usize {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes every held line to stderr and clears the buffer.
    pub fn drain_to_console(&self) {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        for log in logs.iter() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&log.clone().into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", log);
        }
        logs.clear();
    }
}

impl Sink for InMemorySink {
    fn write_line(&self, _line: &LogLine, rendered: &str) {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        logs.push(rendered.to_string());
    }

    fn is_terminal(&self) -> bool {
        self.interactive
    }

    fn prepare_to_die(&self) {
        // A process that is about to exit can't be inspected; show what we have.
        self.drain_to_console();
    }
}
