//! Debug-probe channel backend
//!
//! The probe exposes one up-channel multiplexed into virtual terminals. A
//! [`ProbeTransport`] is the narrow primitive set the facade needs from it:
//! select a terminal, write a string.

use super::{Backend, LineRecord};
use crate::color::{severity_color, CTRL_RESET};
use crate::config::LineEnding;
use std::io;
use ulog_core_types::ChannelId;

/// Write primitives of a debug-probe channel
pub trait ProbeTransport {
    /// Bring the channel up
    fn init(&mut self) {}

    /// Route subsequent writes to `channel`
    fn set_terminal(&mut self, channel: ChannelId);

    /// Write `s` to the current terminal
    fn write_str(&mut self, s: &str);
}

/// Probe-channel adapter
#[derive(Debug)]
pub struct ProbeBackend<T> {
    transport: T,
    color: bool,
    line_ending: LineEnding,
}

impl<T: ProbeTransport> ProbeBackend<T> {
    pub fn new(transport: T, color: bool, line_ending: LineEnding) -> Self {
        Self {
            transport,
            color,
            line_ending,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl<T: ProbeTransport> Backend for ProbeBackend<T> {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn start(&mut self) {
        self.transport.init();
    }

    fn write_line(&mut self, record: &LineRecord<'_>) {
        self.transport.set_terminal(record.channel);
        if self.color {
            match severity_color(record.severity) {
                Some(color) => {
                    self.transport.write_str(CTRL_RESET);
                    self.transport.write_str(color);
                    self.transport.write_str(record.text);
                    self.transport.write_str(CTRL_RESET);
                }
                None => self.transport.write_str(record.text),
            }
            // Clears any color state a previous writer left open.
            self.transport.write_str(CTRL_RESET);
        } else {
            self.transport.write_str(record.text);
        }
        let ending = self.line_ending.as_str();
        if !ending.is_empty() {
            self.transport.write_str(ending);
        }
    }
}

/// Marker byte announcing a terminal switch on the wire
pub const TERMINAL_SWITCH: u8 = 0xFF;

/// Host-side probe transport over any byte stream
///
/// Terminal switches are encoded the way probe viewers expect them: a
/// `0xFF` marker followed by the terminal's hex digit. The marker is only
/// written when the terminal actually changes; the stream starts on
/// terminal 0.
#[derive(Debug)]
pub struct VirtualTerminalWriter<W> {
    out: W,
    current: ChannelId,
}

impl<W: io::Write> VirtualTerminalWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current: ChannelId::DEFAULT,
        }
    }

    pub fn current_terminal(&self) -> ChannelId {
        self.current
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> ProbeTransport for VirtualTerminalWriter<W> {
    /// Ids above `ChannelId::MAX` are ignored; output stays on the current terminal
    fn set_terminal(&mut self, channel: ChannelId) {
        if !channel.is_valid() || channel == self.current {
            return;
        }
        self.current = channel;
        self.out
            .write_all(&[TERMINAL_SWITCH, channel.wire_digit()])
            .ok();
    }

    fn write_str(&mut self, s: &str) {
        self.out.write_all(s.as_bytes()).ok();
        self.out.flush().ok();
    }
}
