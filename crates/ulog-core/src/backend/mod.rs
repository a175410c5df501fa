//! Backend adapters
//!
//! A backend accepts a fully rendered line. The `Logger` holds an ordered
//! list of them and hands every one the same `LineRecord`; a backend that is
//! not configured is simply not in the list.
//!
//! - [`probe`]: debug-probe text channel with virtual terminals
//! - [`structured`]: structured logging library (tracing)
//! - [`stdout`]: process standard output

pub mod probe;
pub mod stdout;
pub mod structured;

pub use probe::{ProbeBackend, ProbeTransport, VirtualTerminalWriter};
pub use stdout::StdoutBackend;
pub use structured::{StructuredBackend, StructuredSink, TracingSink};

use ulog_core_types::{ChannelId, Severity};

/// One rendered line and the context it was emitted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// Probe terminal the line is addressed to
    pub channel: ChannelId,
    pub severity: Severity,
    /// Tag the line was framed with; empty for raw lines
    pub tag: &'a str,
    /// Finished text, without terminator
    pub text: &'a str,
}

/// A sink for rendered lines
pub trait Backend {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Bring the underlying transport up (called by `Logger::init`)
    fn start(&mut self) {}

    /// Shut the underlying transport down (called by `Logger::deinit`)
    fn stop(&mut self) {}

    /// Deliver one line. Transport failures are swallowed.
    fn write_line(&mut self, record: &LineRecord<'_>);
}
