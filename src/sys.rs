// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform time and the process clock.
//!
//! `Instant` comes from `std::time` on native targets and from `web_time` on
//! WebAssembly, where `std::time::Instant::now` panics.
//!
//! Log lines carry the number of seconds since the process started. "Started"
//! is approximated by the first time anything asks [`process_start`], which the
//! [`crate::Logger`] constructor does, so constructing the logger early in
//! `main` gives the expected numbers.

use std::fmt::Debug;
use std::sync::OnceLock;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

/// The instant the process clock counts from.
pub fn process_start() -> Instant {
    *PROCESS_START.get_or_init(Instant::now)
}

/// Source of the timestamp printed at the front of every log line.
pub trait Clock: Debug + Send + Sync {
    /// Seconds elapsed since the process started. Must never decrease.
    fn seconds_since_start(&self) -> f64;
}

/// The default [`Clock`], counting from [`process_start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProcessClock;

impl ProcessClock {
    pub fn new() -> Self {
        process_start();
        Self
    }
}

impl Clock for ProcessClock {
    fn seconds_since_start(&self) -> f64 {
        Instant::now().duration_since(process_start()).as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_clock_is_monotonic() {
        let clock = ProcessClock::new();
        let first = clock.seconds_since_start();
        std::thread::sleep(Duration::from_millis(2));
        let second = clock.seconds_since_start();
        assert!(first >= 0.0);
        assert!(second >= first);
        assert!(second - first >= 0.001);
    }
}
