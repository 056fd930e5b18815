// SPDX-License-Identifier: MIT OR Apache-2.0

//! The script-engine end of log forwarding.

use super::LOG_CHANNEL;
use super::codec::Codec;
use super::receiver::RemoteLogRecord;
use crate::error::Error;
use crate::level::Level;
use std::fmt::Debug;

/// Delivers encoded messages to the other process.
pub trait Transport: Debug + Send + Sync {
    fn send(&self, channel: &str, payload: Vec<u8>) -> Result<(), Error>;
}

/**
Packs log calls made in the script engine and sends them to the primary process.

Nothing is filtered here. Verbosity lives in the primary process, which sees
the record exactly as if it had been logged locally.
*/
#[derive(Debug)]
pub struct RemoteLogForwarder<T: Transport, C: Codec = super::JsonCodec> {
    transport: T,
    codec: C,
}

impl<T: Transport, C: Codec> RemoteLogForwarder<T, C> {
    pub fn new(transport: T, codec: C) -> Self {
        Self { transport, codec }
    }

    /// Sends one record. `message` is final text and is not re-rendered remotely.
    pub fn forward(
        &self,
        level: Level,
        line: &str,
        location: &str,
        message: &str,
    ) -> Result<(), Error> {
        let record = RemoteLogRecord {
            level,
            line: line.to_string(),
            location: location.to_string(),
            message: message.to_string(),
        };
        self.forward_record(&record)
    }

    pub fn forward_record(&self, record: &RemoteLogRecord) -> Result<(), Error> {
        let payload = self.codec.encode(&record.to_values())?;
        self.transport.send(LOG_CHANNEL, payload)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::{Frame, JsonCodec};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recording(Mutex<Vec<Frame>>);

    impl Transport for Recording {
        fn send(&self, channel: &str, payload: Vec<u8>) -> Result<(), Error> {
            self.0.lock().unwrap().push(Frame::new(channel, payload));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Closed;

    impl Transport for Closed {
        fn send(&self, _channel: &str, _payload: Vec<u8>) -> Result<(), Error> {
            Err(Error::TransportClosed)
        }
    }

    #[test]
    fn sends_on_log_channel() {
        let forwarder = RemoteLogForwarder::new(Recording::default(), JsonCodec);
        forwarder
            .forward(Level::Debug, "17", "./rc.lua", "loaded")
            .unwrap();
        let frames = forwarder.transport().0.lock().unwrap();
        assert_eq!(
            *frames,
            vec![Frame::new(LOG_CHANNEL, br#"[5,"17","./rc.lua","loaded"]"#.to_vec())]
        );
    }

    #[test]
    fn transport_errors_propagate() {
        let forwarder = RemoteLogForwarder::new(Closed, JsonCodec);
        assert!(matches!(
            forwarder.forward(Level::Info, "1", "a.lua", "x"),
            Err(Error::TransportClosed)
        ));
    }
}
