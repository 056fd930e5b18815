// SPDX-License-Identifier: MIT OR Apache-2.0

//! The primary-process end of log forwarding.

use super::codec::{Codec, ScriptValue};
use super::{Frame, LOG_CHANNEL};
use crate::error::Error;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::Arc;

/// Number of values in a log frame: level, line, location, message.
pub const LOG_FRAME_ARITY: usize = 4;

/// A decoded log frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteLogRecord {
    pub level: Level,
    pub line: String,
    pub location: String,
    pub message: String,
}

impl RemoteLogRecord {
    /// The values a forwarder encodes for this record, in wire order.
    pub fn to_values(&self) -> Vec<ScriptValue> {
        vec![
            ScriptValue::Integer(self.level.index()),
            ScriptValue::from(self.line.as_str()),
            ScriptValue::from(self.location.as_str()),
            ScriptValue::from(self.message.as_str()),
        ]
    }

    fn from_values(values: Vec<ScriptValue>) -> Result<Self, Error> {
        let [level, line, location, message]: [ScriptValue; LOG_FRAME_ARITY] =
            values.try_into().map_err(|values: Vec<ScriptValue>| Error::Arity {
                expected: LOG_FRAME_ARITY,
                found: values.len(),
            })?;

        let index = level.to_integer().ok_or(Error::InvalidField {
            field: "level",
            expected: "integer",
        })?;
        let string = |value: &ScriptValue, field| {
            value.to_script_string().ok_or(Error::InvalidField {
                field,
                expected: "string",
            })
        };
        Ok(Self {
            level: Level::from_index(index).ok_or(Error::LevelOutOfRange(index))?,
            line: string(&line, "line")?,
            location: string(&location, "location")?,
            message: string(&message, "message")?,
        })
    }
}

/// Decodes a log frame payload without acting on it.
pub fn decode_log_frame(codec: &dyn Codec, payload: &[u8]) -> Result<RemoteLogRecord, Error> {
    RemoteLogRecord::from_values(codec.decode(payload)?)
}

/**
Replays remote log records through a [`Logger`].

The transport is expected to deliver frames one at a time; the receiver holds no
state between frames.
*/
#[derive(Debug)]
pub struct LogReceiver<C: Codec = super::JsonCodec> {
    logger: Arc<Logger>,
    codec: C,
}

impl<C: Codec> LogReceiver<C> {
    pub fn new(logger: Arc<Logger>, codec: C) -> Self {
        Self { logger, codec }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /**
    Handles the payload of one frame from the log channel.

    The message is logged verbatim: it was rendered on the sending side.

    # Panics

    If the payload does not decode to exactly four values of the expected types.
    Sender and receiver disagree about the protocol at that point, and there is no
    record worth salvaging.
    */
    pub fn on_remote_log_message(&self, payload: &[u8]) {
        let record = match decode_log_frame(&self.codec, payload) {
            Ok(record) => record,
            Err(e) => panic!("malformed remote log frame: {e}"),
        };
        self.logger.log_str(
            record.level,
            &record.line,
            &record.location,
            &record.message,
        );
    }

    /// Handles `frame` if it belongs to the log channel.
    ///
    /// Returns whether the frame was consumed.
    pub fn handle_frame(&self, frame: &Frame) -> bool {
        if frame.channel != LOG_CHANNEL {
            return false;
        }
        self.on_remote_log_message(&frame.payload);
        true
    }
}
