// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_line::LogLine;
use crate::sink::Sink;

/**
The default sink: the process's diagnostic stream.

Nothing is buffered; every line is written with a single `write_all` on a locked
stderr handle.
 */
#[derive(Debug, Clone)]
pub struct StdErrSink {
    interactive: bool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone: derived, the sink only caches one flag
// - Copy: implemented, same reason
// - PartialEq/Eq/Hash: NOT implemented - every instance writes to the same stream,
//   comparing the cached flag would suggest otherwise
// - Default: implemented, detects the terminal like new()
// - Send/Sync: automatic

impl Copy for StdErrSink {}

impl Default for StdErrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrSink {
    /// Creates a sink, detecting once whether stderr is a terminal.
    pub fn new() -> Self {
        Self {
            interactive: crate::ansi::stderr_is_terminal(),
        }
    }

    /// Creates a sink that styles (or doesn't) regardless of what stderr is.
    pub const fn with_terminal(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Sink for StdErrSink {
    fn write_line(
        &self,
        #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))] line: &LogLine,
        rendered: &str,
    ) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut buffer = String::with_capacity(rendered.len() + 1);
            buffer.push_str(rendered);
            buffer.push('\n');
            let mut lock = std::io::stderr().lock();
            // Nowhere left to report a failing stderr.
            let _ = lock.write_all(buffer.as_bytes());
            let _ = lock.flush();
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Level;
            let msg = rendered.to_string();
            match line.level() {
                Level::Fatal | Level::Error => {
                    web_sys::console::error_1(&msg.into());
                }
                Level::Warn => {
                    web_sys::console::warn_1(&msg.into());
                }
                Level::Info => {
                    web_sys::console::info_1(&msg.into());
                }
                Level::Verbose => {
                    web_sys::console::log_1(&msg.into());
                }
                Level::Debug => {
                    web_sys::console::debug_1(&msg.into());
                }
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.interactive
    }

    fn prepare_to_die(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = std::io::stderr().flush();
        }
    }
}
