// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# grouplog

grouplog is a process-local logging library with per-subsystem verbosity, built
for programs that embed a scripting engine.

# Groups

Every log call belongs to a *group* derived from the file it was made in.
Native source files map to the `core` namespace and scripts to the `lua`
namespace:

| Location            | Group             |
|---------------------|-------------------|
| `src/net/peer.rs`   | `core/src/net/peer` |
| `window.c`          | `core/window`     |
| `./init.lua`        | `lua/init`        |
| `rc/keys.lua`       | `lua/rc/keys`     |

Verbosity is configured per group and inherited along the path: setting `core`
to `debug` makes everything under `core/` show debug output unless a deeper
group says otherwise. The reserved group `all` sits above both namespaces. With
nothing configured, every group shows `info` and more severe.

# Levels

From most severe to most detailed: `fatal`, `error`, `warn`, `info`, `verbose`,
`debug`. A `fatal` line ends the process.

# Output

One line per call on stderr:

```text
[    0.412530] W: src/net/peer.rs:88: peer 3 is slow
[    0.412611] E: ./init.lua:12: bad key binding
                  second line of the same message
```

Terminals get the line in the level's color; redirected output is stripped of
escape sequences.

# The API

```
use grouplog::{InMemorySink, Level, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Logger::builder().sink(sink.clone()).build();
grouplog::config::apply_verbosity_directives(logger.registry(), "warn,core/net=debug").unwrap();

logger.log_str(Level::Debug, "88", "net/peer.c", "handshake done");
logger.log_str(Level::Info, "12", "./init.lua", "below warn, dropped");

assert!(sink.drain_logs().ends_with("D: net/peer.c:88: handshake done"));
```

In application code the [`log!`] family of macros fill in the file and line.

# Script engine forwarding

Log calls made in the script engine are not printed there. They are sent to the
primary process as `(level, line, location, message)` and replayed through the
same [`Logger`]; see [`ipc`].
*/

pub mod ansi;
pub mod config;
mod error;
pub mod global_logger;
pub mod group;
mod inmemory_sink;
pub mod ipc;
mod level;
mod log_line;
mod logger;
mod macros;
mod registry;
mod sink;
mod stderr_sink;
mod sys;

pub use error::Error;
pub use global_logger::{global_logger, install_global_logger};
pub use inmemory_sink::InMemorySink;
pub use level::Level;
pub use log_line::{CONTINUATION_INDENT, LogLine};
pub use logger::{FATAL_EXIT_STATUS, Logger, LoggerBuilder};
pub use registry::VerbosityRegistry;
pub use sink::Sink;
pub use stderr_sink::StdErrSink;
pub use sys::{Clock, Duration, Instant, ProcessClock};
