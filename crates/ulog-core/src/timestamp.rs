//! Timestamp provider
//!
//! The facade only needs a monotonic millisecond tick. On a target that is
//! the system tick counter; on a host `MonotonicTicks` counts from its own
//! creation. Any `Fn() -> u32` closure also works, which keeps tests
//! deterministic.

use crate::config::TimestampFormat;
use std::fmt::{self, Write};
use std::time::Instant;

const MS_PER_SECOND: u32 = 1000;
const MS_PER_MINUTE: u32 = MS_PER_SECOND * 60;
const MS_PER_HOUR: u32 = MS_PER_MINUTE * 60;
const MS_PER_DAY: u32 = MS_PER_HOUR * 24;

/// Source of monotonic millisecond ticks
pub trait TickSource {
    fn now_ms(&self) -> u32;
}

impl<F> TickSource for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Host tick source counting milliseconds since construction
///
/// Wraps around after roughly 49.7 days, like a 32-bit system tick.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTicks {
    start: Instant,
}

impl MonotonicTicks {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicTicks {
    fn now_ms(&self) -> u32 {
        // Truncation is the wraparound.
        self.start.elapsed().as_millis() as u32
    }
}

/// A tick paired with the format it should be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub format: TimestampFormat,
    pub tick: u32,
}

impl Timestamp {
    /// Sample `source` now
    pub fn capture(format: TimestampFormat, source: &dyn TickSource) -> Self {
        Self {
            format,
            tick: source.now_ms(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_timestamp(f, self.format, self.tick)
    }
}

/// Write `tick` in the selected format
///
/// - `Millis`: `[1234 ms]`
/// - `Elapsed`: `[01d-02h:03m:04s^005ms]`
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_timestamp<W: Write>(out: &mut W, format: TimestampFormat, tick: u32) -> fmt::Result {
    match format {
        TimestampFormat::Millis => write!(out, "[{} ms]", tick),
        TimestampFormat::Elapsed => {
            let days = tick / MS_PER_DAY;
            let hours = (tick / MS_PER_HOUR) % 24;
            let minutes = (tick / MS_PER_MINUTE) % 60;
            let seconds = (tick / MS_PER_SECOND) % 60;
            let millis = tick % MS_PER_SECOND;
            write!(
                out,
                "[{:02}d-{:02}h:{:02}m:{:02}s^{:03}ms]",
                days, hours, minutes, seconds, millis
            )
        }
    }
}
