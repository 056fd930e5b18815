// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-process [`Transport`].
//!
//! Useful when the script engine runs on another thread of the same process, and
//! in tests. Frames are queued on an mpsc channel and delivered by
//! [`ChannelReceiver::pump`], which hands them to a [`LogReceiver`] one at a time
//! on the pumping thread.

use super::codec::Codec;
use super::forwarder::Transport;
use super::receiver::LogReceiver;
use super::Frame;
use crate::error::Error;
use crate::sys::Instant;
use std::fmt::{Debug, Formatter};
use std::sync::{Mutex, PoisonError};
use wasm_safe_mutex::mpsc;

/// Creates a connected sender/receiver pair.
pub fn channel() -> (ChannelSender, ChannelReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        ChannelSender {
            sender: Mutex::new(tx),
        },
        ChannelReceiver { receiver: rx },
    )
}

/// Sending half. Cloning it gives another sender on the same channel.
pub struct ChannelSender {
    sender: Mutex<mpsc::Sender<Frame>>,
}

impl Clone for ChannelSender {
    fn clone(&self) -> Self {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        Self {
            sender: Mutex::new(sender.clone()),
        }
    }
}

impl Debug for ChannelSender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSender").finish_non_exhaustive()
    }
}

impl Transport for ChannelSender {
    fn send(&self, channel: &str, payload: Vec<u8>) -> Result<(), Error> {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        sender
            .send_sync(Frame::new(channel, payload))
            .map_err(|_| Error::TransportClosed)
    }
}

/// Receiving half.
pub struct ChannelReceiver {
    receiver: mpsc::Receiver<Frame>,
}

impl Debug for ChannelReceiver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelReceiver").finish_non_exhaustive()
    }
}

impl ChannelReceiver {
    /// Waits for the next frame until `deadline`.
    ///
    /// Returns `None` on timeout or once every sender is gone.
    pub fn recv_until(&self, deadline: Instant) -> Option<Frame> {
        match self.receiver.recv_sync_timeout(deadline) {
            Ok(frame) => Some(frame),
            Err(mpsc::RecvTimeoutError::Timeout | mpsc::RecvTimeoutError::Disconnected) => None,
        }
    }

    /**
    Delivers frames to `receiver` until `deadline` passes or all senders are dropped.

    Frames on channels other than the log channel are discarded. Returns the number
    of log frames handled.

    # Panics

    Propagates the panic of [`LogReceiver::on_remote_log_message`] for a malformed
    frame.
    */
    pub fn pump<C: Codec>(&self, receiver: &LogReceiver<C>, deadline: Instant) -> usize {
        let mut handled = 0;
        while let Some(frame) = self.recv_until(deadline) {
            if receiver.handle_frame(&frame) {
                handled += 1;
            }
        }
        handled
    }
}
