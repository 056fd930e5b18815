// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_line::LogLine;
use std::fmt::Debug;

/// A destination for composed log lines.
pub trait Sink: Debug + Send + Sync {
    /**
        Writes one line.

        `rendered` is the output of [`LogLine::render`] for this sink's
        [`is_terminal`](Self::is_terminal), without a trailing newline. Sinks should
        write the line and its newline in one operation so lines from different
        calls do not interleave.
    */
    fn write_line(&self, line: &LogLine, rendered: &str);

    /**
    Whether the destination is an interactive terminal.

    Terminals receive styled output; everything else receives plain text.
    */
    fn is_terminal(&self) -> bool;

    /**
    The process is about to exit after a fatal line.  Flush anything buffered.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense for sinks that own a handle, so it's out.
PartialEq and Eq are possible but it's a little unclear if we mean data equality or the same destination.  Avoid.
Default is not necessarily sensible since who knows how the sink is constructed.
Send/Sync are required: one logger may be shared between threads even though emission order isn't guaranteed.
*/
