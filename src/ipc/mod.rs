// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Forwarding log records from the script engine to the primary process.

The script engine does not format or filter anything itself. A log call there is
packed into a four value tuple `(level, line, location, message)`, encoded with a
[`Codec`], and sent on the [`LOG_CHANNEL`] of a [`Transport`]. On the primary side
a [`LogReceiver`] decodes the tuple and hands it to [`crate::Logger::log_str`], so
remote records go through exactly the same filtering and layout as native ones.

```
use grouplog::ipc::{channel, JsonCodec, LogReceiver, RemoteLogForwarder};
use grouplog::{InMemorySink, Level, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Arc::new(Logger::builder().sink(sink.clone()).build());

let (sender, frames) = channel();
let forwarder = RemoteLogForwarder::new(sender, JsonCodec);
forwarder.forward(Level::Error, "42", "net.c", "boom").unwrap();
drop(forwarder);

let receiver = LogReceiver::new(logger, JsonCodec);
let deadline = grouplog::Instant::now() + grouplog::Duration::from_secs(1);
assert_eq!(frames.pump(&receiver, deadline), 1);
assert!(sink.drain_logs().ends_with("E: net.c:42: boom"));
```
*/

mod channel;
mod codec;
mod forwarder;
mod receiver;

pub use channel::{ChannelReceiver, ChannelSender, channel};
pub use codec::{Codec, JsonCodec, ScriptValue};
pub use forwarder::{RemoteLogForwarder, Transport};
pub use receiver::{LogReceiver, RemoteLogRecord, decode_log_frame};

/// Name of the channel log records travel on.
pub const LOG_CHANNEL: &str = "log";

/// One message as a transport delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub channel: String,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(channel: &str, payload: Vec<u8>) -> Self {
        Self {
            channel: channel.to_string(),
            payload,
        }
    }
}
