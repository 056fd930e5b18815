// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors returned by grouplog.
//!
//! Only recoverable conditions are represented here. Contract violations such as
//! a location that belongs to neither naming namespace panic instead, and a fatal
//! log call exits the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A level name that is not in the level table.
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),

    /// A verbosity directive that is not `level` or `group=level`.
    #[error("invalid verbosity directive `{directive}`: {reason}")]
    InvalidDirective {
        directive: String,
        reason: &'static str,
    },

    /// The payload could not be encoded or decoded by the codec.
    ///
    /// Holds whatever error the codec reported; build it with [`Error::codec`].
    #[error("codec failure: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A log frame carried the wrong number of values.
    #[error("log frame carries {found} values, expected {expected}")]
    Arity { expected: usize, found: usize },

    /// A log frame value could not be coerced to the expected type.
    #[error("log frame field `{field}` is not a {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// A log frame carried an integer level outside the level table.
    #[error("log frame level {0} is out of range")]
    LevelOutOfRange(i64),

    /// The receiving end of a transport is gone.
    #[error("transport closed")]
    TransportClosed,

    /// [`crate::install_global_logger`] was called after the global logger was set.
    #[error("the global logger is already installed")]
    GlobalLoggerInstalled,
}

impl Error {
    /// Wraps a codec's own error, or a plain message, as [`Error::Codec`].
    pub fn codec(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Codec(source.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::codec(e)
    }
}
