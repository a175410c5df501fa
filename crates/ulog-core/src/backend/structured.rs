//! Structured logging library backend
//!
//! The library is reached through its per-level emit primitives, modelled by
//! [`StructuredSink`]. [`TracingSink`] is the implementation on top of
//! `tracing`; lines without a native tracing level carry a marker field
//! (`assert = true`, `raw = true`).

use super::{Backend, LineRecord};
use ulog_core_types::schema::TARGET_LINES;
use ulog_core_types::Severity;

/// Per-level emit primitives of a structured logging library
pub trait StructuredSink {
    fn start(&mut self) {}
    fn stop(&mut self) {}

    fn assert(&mut self, tag: &str, msg: &str);
    fn error(&mut self, tag: &str, msg: &str);
    fn warn(&mut self, tag: &str, msg: &str);
    fn info(&mut self, tag: &str, msg: &str);
    fn debug(&mut self, tag: &str, msg: &str);
    fn verbose(&mut self, tag: &str, msg: &str);

    /// Untagged output with no level
    fn raw(&mut self, msg: &str);
}

/// `tracing` events under the `ulog` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StructuredSink for TracingSink {
    fn assert(&mut self, tag: &str, msg: &str) {
        tracing::error!(target: TARGET_LINES, tag, assert = true, "{}", msg);
    }

    fn error(&mut self, tag: &str, msg: &str) {
        tracing::error!(target: TARGET_LINES, tag, "{}", msg);
    }

    fn warn(&mut self, tag: &str, msg: &str) {
        tracing::warn!(target: TARGET_LINES, tag, "{}", msg);
    }

    fn info(&mut self, tag: &str, msg: &str) {
        tracing::info!(target: TARGET_LINES, tag, "{}", msg);
    }

    fn debug(&mut self, tag: &str, msg: &str) {
        tracing::debug!(target: TARGET_LINES, tag, "{}", msg);
    }

    fn verbose(&mut self, tag: &str, msg: &str) {
        tracing::trace!(target: TARGET_LINES, tag, "{}", msg);
    }

    fn raw(&mut self, msg: &str) {
        tracing::info!(target: TARGET_LINES, raw = true, "{}", msg);
    }
}

/// Structured-library adapter
#[derive(Debug)]
pub struct StructuredBackend<S> {
    sink: S,
}

impl<S: StructuredSink> StructuredBackend<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: StructuredSink> Backend for StructuredBackend<S> {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn start(&mut self) {
        self.sink.start();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn write_line(&mut self, record: &LineRecord<'_>) {
        let (tag, msg) = (record.tag, record.text);
        match record.severity {
            Severity::Assert => self.sink.assert(tag, msg),
            Severity::Error => self.sink.error(tag, msg),
            Severity::Warn => self.sink.warn(tag, msg),
            Severity::Info => self.sink.info(tag, msg),
            Severity::Debug => self.sink.debug(tag, msg),
            Severity::Verbose => self.sink.verbose(tag, msg),
            Severity::Raw => self.sink.raw(msg),
        }
    }
}
