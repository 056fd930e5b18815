// SPDX-License-Identifier: MIT OR Apache-2.0

//! The composed form of one log call.
//!
//! A [`LogLine`] is built by the [`crate::Logger`] once a call has passed the
//! verbosity filter. It holds the already indented message; each [`crate::Sink`]
//! then asks for either the plain or the styled rendering depending on whether
//! it writes to a terminal.
//!
//! The layout is
//!
//! ```text
//! [    1.234567] W: core/window.c:42: message
//! ```
//!
//! and continuation lines of a multi-line message are indented by
//! [`CONTINUATION_INDENT`] so they line up under the message body.

use crate::ansi;
use crate::level::Level;
use std::fmt::{Display, Formatter};

/// Prefix inserted after every newline inside a message.
pub const CONTINUATION_INDENT: &str = "                  ";

/// Re-indents the lines of `message` after the first.
pub fn indent_continuation_lines(message: &str) -> String {
    message.replace('\n', &format!("\n{CONTINUATION_INDENT}"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    level: Level,
    seconds: f64,
    location: String,
    line: String,
    message: String,
}

impl LogLine {
    /// Builds a line from a rendered message, indenting its continuation lines.
    pub fn new(level: Level, seconds: f64, location: &str, line: &str, message: &str) -> Self {
        Self {
            level,
            seconds,
            location: location.to_string(),
            line: line.to_string(),
            message: indent_continuation_lines(message),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// The indented message, exactly as it was handed to the logger otherwise.
    pub fn message(&self) -> &str {
        &self.message
    }

    /**
    Renders the line without its trailing newline.

    For a terminal the whole line is wrapped in the level's style and a reset.
    Otherwise escape sequences are stripped from the message so redirected output
    stays plain text.
    */
    pub fn render(&self, interactive: bool) -> String {
        if interactive {
            format!(
                "{}{}{}",
                self.level.style(),
                self.layout(&self.message),
                ansi::RESET
            )
        } else {
            self.layout(&ansi::strip_ansi_escapes(&self.message))
        }
    }

    fn layout(&self, message: &str) -> String {
        format!(
            "[{:12.6}] {}: {}:{}: {}",
            self.seconds,
            self.level.prefix_char(),
            self.location,
            self.line,
            message
        )
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}

/*
Boilerplate notes for LogLine:

- Clone: useful when the same line goes to several sinks that keep it.
- PartialEq: derived for tests. Eq and Hash are out because of the f64 timestamp.
- Default: there is no meaningful empty line.
- Display: the plain rendering, which is what a non-terminal sink writes.
*/
