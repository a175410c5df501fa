//! Dispatcher
//!
//! `Logger` is the single entry point behind every macro. Each call renders
//! its line exactly once into a stack `LineBuffer<N>` and then hands that
//! same text to every backend in order, so all sinks see identical output.
//!
//! # Example
//!
//! ```
//! use ulog_core::{BackendSet, Logger, Severity, UlogConfig};
//!
//! let config = UlogConfig::default()
//!     .with_backends(BackendSet::STDOUT)
//!     .with_banner(false);
//! let mut logger: Logger = Logger::builder(config).build().unwrap();
//! logger.init();
//! ulog_core::ulog_i!(logger, tag = "NET", "link up after {} ms", 12);
//! logger.deinit();
//! ```

use crate::backend::{
    Backend, LineRecord, ProbeBackend, ProbeTransport, StdoutBackend, StructuredBackend,
    StructuredSink, TracingSink,
};
use crate::banner::BANNER;
use crate::config::{BackendKind, UlogConfig, DEFAULT_LINE_CAPACITY};
use crate::errors::{Result, UlogError};
use crate::format::format_line;
use crate::hexdump;
use crate::line_buffer::LineBuffer;
use crate::timestamp::{MonotonicTicks, TickSource, Timestamp};
use crate::COMPILED_IN;
use std::fmt;
use std::io;
use ulog_core_types::schema::TARGET_FACILITY;
use ulog_core_types::{ChannelId, Severity};

/// Formats once, fans out to every configured backend
pub struct Logger<const N: usize = DEFAULT_LINE_CAPACITY> {
    config: UlogConfig,
    backends: Vec<Box<dyn Backend>>,
    ticks: Box<dyn TickSource>,
    running: bool,
}

impl<const N: usize> Logger<N> {
    pub fn builder(config: UlogConfig) -> LoggerBuilder<N> {
        LoggerBuilder::new(config)
    }

    pub fn config(&self) -> &UlogConfig {
        &self.config
    }

    /// Whether calls reach the backends at all
    pub fn is_active(&self) -> bool {
        COMPILED_IN && self.config.enabled
    }

    /// Whether `init` has run without a matching `deinit`
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Declared minimum severity; dispatch does not filter on it
    pub fn min_severity(&self) -> Severity {
        self.config.min_severity
    }

    /// Backend names in delivery order
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Start every backend and write the banner if configured
    pub fn init(&mut self) {
        if !self.is_active() {
            return;
        }
        for backend in &mut self.backends {
            backend.start();
        }
        self.running = true;
        tracing::debug!(
            target: TARGET_FACILITY,
            backends = ?self.backend_names(),
            min_severity = %self.config.min_severity,
            line_capacity = N,
            "ulog started"
        );
        if self.config.banner {
            for line in BANNER {
                self.raw(format_args!("{}", line));
            }
        }
    }

    /// Stop every backend
    pub fn deinit(&mut self) {
        if !self.is_active() {
            return;
        }
        for backend in &mut self.backends {
            backend.stop();
        }
        self.running = false;
        tracing::debug!(target: TARGET_FACILITY, "ulog stopped");
    }

    /// Render one line and deliver it to every backend
    ///
    /// Output longer than `N - 1` bytes is silently truncated.
    pub fn emit(
        &mut self,
        channel: ChannelId,
        severity: Severity,
        tag: &str,
        args: fmt::Arguments<'_>,
    ) {
        self.emit_with_defaults(Some(channel), severity, Some(tag), args);
    }

    /// `emit` with the configured default channel and tag filled in for `None`
    pub fn emit_with_defaults(
        &mut self,
        channel: Option<ChannelId>,
        severity: Severity,
        tag: Option<&str>,
        args: fmt::Arguments<'_>,
    ) {
        if !self.is_active() {
            return;
        }
        let Self {
            config,
            backends,
            ticks,
            ..
        } = self;
        let channel = channel.unwrap_or(config.default_channel);
        let tag = tag.unwrap_or(config.default_tag.as_str());
        let timestamp = config
            .timestamp
            .map(|format| Timestamp::capture(format, &**ticks));

        let mut line = LineBuffer::<N>::new();
        format_line(&mut line, severity, tag, timestamp, args);
        fan_out(
            backends,
            &LineRecord {
                channel,
                severity,
                tag,
                text: line.as_str(),
            },
        );
    }

    /// Unframed line on the default channel
    pub fn raw(&mut self, args: fmt::Arguments<'_>) {
        let channel = self.config.default_channel;
        self.emit(channel, Severity::Raw, "", args);
    }

    /// Hex dump using the configured row width
    pub fn hexdump(&mut self, name: &str, data: &[u8]) {
        let width = self.config.hex_width;
        self.hexdump_with_width(name, width, data);
    }

    /// Hex dump with an explicit row width (zero is treated as one)
    ///
    /// Lines bypass the formatter: no frame, no timestamp, no color.
    pub fn hexdump_with_width(&mut self, name: &str, width: u8, data: &[u8]) {
        if !self.is_active() {
            return;
        }
        let channel = self.config.default_channel;
        let mut line = LineBuffer::<N>::new();

        hexdump::write_title(&mut line, name);
        fan_out(&mut self.backends, &raw_record(channel, line.as_str()));

        for (offset, row) in hexdump::rows(data, width) {
            hexdump::write_row(&mut line, offset, row);
            fan_out(&mut self.backends, &raw_record(channel, line.as_str()));
        }
    }
}

fn raw_record(channel: ChannelId, text: &str) -> LineRecord<'_> {
    LineRecord {
        channel,
        severity: Severity::Raw,
        tag: "",
        text,
    }
}

fn fan_out(backends: &mut [Box<dyn Backend>], record: &LineRecord<'_>) {
    for backend in backends.iter_mut() {
        backend.write_line(record);
    }
}

impl<const N: usize> fmt::Debug for Logger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("backends", &self.backend_names())
            .field("line_capacity", &N)
            .field("running", &self.running)
            .finish()
    }
}

/// Assembles a `Logger` from a configuration and the transports it needs
///
/// Backends are created for the kinds selected in `config.backends`, in the
/// order probe, structured, stdout, followed by any extra backends. The
/// structured backend defaults to [`TracingSink`] and stdout to the process
/// standard output; the probe backend has no host default and needs a
/// transport.
pub struct LoggerBuilder<const N: usize = DEFAULT_LINE_CAPACITY> {
    config: UlogConfig,
    probe: Option<Box<dyn Backend>>,
    structured: Option<Box<dyn Backend>>,
    stdout: Option<Box<dyn Backend>>,
    extra: Vec<Box<dyn Backend>>,
    ticks: Option<Box<dyn TickSource>>,
}

impl<const N: usize> LoggerBuilder<N> {
    pub fn new(config: UlogConfig) -> Self {
        Self {
            config,
            probe: None,
            structured: None,
            stdout: None,
            extra: Vec::new(),
            ticks: None,
        }
    }

    /// Transport for the probe backend
    pub fn probe_transport<T: ProbeTransport + 'static>(mut self, transport: T) -> Self {
        let backend = ProbeBackend::new(transport, self.config.color, self.config.line_ending);
        self.probe = Some(Box::new(backend));
        self
    }

    /// Emit primitives for the structured backend
    pub fn structured_sink<S: StructuredSink + 'static>(mut self, sink: S) -> Self {
        self.structured = Some(Box::new(StructuredBackend::new(sink)));
        self
    }

    /// Byte sink standing in for standard output
    pub fn stdout_writer<W: io::Write + 'static>(mut self, out: W) -> Self {
        let backend = StdoutBackend::with_writer(out, self.config.color, self.config.line_ending);
        self.stdout = Some(Box::new(backend));
        self
    }

    /// Additional backend, always appended after the configured ones
    pub fn backend<B: Backend + 'static>(mut self, backend: B) -> Self {
        self.extra.push(Box::new(backend));
        self
    }

    /// Tick source for timestamps (defaults to `MonotonicTicks`)
    pub fn tick_source<T: TickSource + 'static>(mut self, ticks: T) -> Self {
        self.ticks = Some(Box::new(ticks));
        self
    }

    /// Validate the configuration and assemble the backend list
    ///
    /// # Errors
    ///
    /// Returns the validation errors of `UlogConfig::validate`, and
    /// `MissingProbeTransport` when the probe backend is selected without a
    /// transport.
    pub fn build(mut self) -> Result<Logger<N>> {
        self.config.validate()?;

        let mut backends: Vec<Box<dyn Backend>> = Vec::new();
        for kind in self.config.backends.iter() {
            let backend: Box<dyn Backend> = match kind {
                BackendKind::Probe => self.probe.take().ok_or(UlogError::MissingProbeTransport)?,
                BackendKind::Structured => match self.structured.take() {
                    Some(backend) => backend,
                    None => Box::new(StructuredBackend::new(TracingSink)),
                },
                BackendKind::Stdout => match self.stdout.take() {
                    Some(backend) => backend,
                    None => Box::new(StdoutBackend::new(
                        self.config.color,
                        self.config.line_ending,
                    )),
                },
            };
            backends.push(backend);
        }
        backends.append(&mut self.extra);

        tracing::debug!(
            target: TARGET_FACILITY,
            backends = ?self.config.backends,
            enabled = self.config.enabled,
            "logger assembled"
        );

        Ok(Logger {
            config: self.config,
            backends,
            ticks: self
                .ticks
                .unwrap_or_else(|| Box::new(MonotonicTicks::new())),
            running: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendSet;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Lines(Rc<RefCell<Vec<(Severity, String, String)>>>);

    impl Backend for Lines {
        fn name(&self) -> &'static str {
            "lines"
        }

        fn write_line(&mut self, record: &LineRecord<'_>) {
            self.0.borrow_mut().push((
                record.severity,
                record.tag.to_string(),
                record.text.to_string(),
            ));
        }
    }

    fn logger_with(lines: &Lines, config: UlogConfig) -> Logger<64> {
        Logger::builder(config.with_backends(BackendSet::NONE))
            .backend(lines.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_emit_formats_once_per_call() {
        let lines = Lines::default();
        let mut logger = logger_with(&lines, UlogConfig::default());
        logger.emit(
            ChannelId::DEFAULT,
            Severity::Error,
            "NET",
            format_args!("fail {}", 7),
        );
        assert_eq!(
            *lines.0.borrow(),
            vec![(Severity::Error, "NET".to_string(), "[E/NET] fail 7".to_string())]
        );
    }

    #[test]
    fn test_defaults_fill_missing_tag() {
        let lines = Lines::default();
        let mut logger = logger_with(&lines, UlogConfig::default().with_default_tag("APP"));
        logger.emit_with_defaults(None, Severity::Info, None, format_args!("x"));
        assert_eq!(lines.0.borrow()[0].2, "[I/APP] x");
    }

    #[test]
    fn test_timestamp_uses_tick_source() {
        let lines = Lines::default();
        let config = UlogConfig::default()
            .with_backends(BackendSet::NONE)
            .with_timestamp(Some(crate::config::TimestampFormat::Millis));
        let mut logger: Logger<64> = Logger::builder(config)
            .backend(lines.clone())
            .tick_source(|| 250u32)
            .build()
            .unwrap();
        logger.emit(ChannelId::DEFAULT, Severity::Debug, "T", format_args!("go"));
        assert_eq!(lines.0.borrow()[0].2, "[D/T] [250 ms] go");
    }

    #[test]
    fn test_long_line_truncated_to_capacity() {
        let lines = Lines::default();
        let mut logger = logger_with(&lines, UlogConfig::default());
        let long = "x".repeat(200);
        logger.emit(ChannelId::DEFAULT, Severity::Raw, "", format_args!("{}", long));
        assert_eq!(lines.0.borrow()[0].2.len(), 63);
    }

    #[test]
    fn test_missing_probe_transport_is_an_error() {
        let config = UlogConfig::default().with_backends(BackendSet::PROBE);
        let err = Logger::<64>::builder(config).build().unwrap_err();
        assert!(matches!(err, UlogError::MissingProbeTransport));
    }

    #[test]
    fn test_invalid_config_rejected_by_build() {
        let config = UlogConfig::default().with_hex_width(0);
        assert!(Logger::<64>::builder(config).build().is_err());
    }

    #[test]
    fn test_backend_order_follows_kind_order() {
        let config = UlogConfig::default().with_backends(BackendSet::ALL);
        let logger: Logger<64> = Logger::builder(config)
            .probe_transport(crate::backend::VirtualTerminalWriter::new(Vec::new()))
            .stdout_writer(Vec::new())
            .backend(Lines::default())
            .build()
            .unwrap();
        assert_eq!(
            logger.backend_names(),
            vec!["probe", "structured", "stdout", "lines"]
        );
    }

    #[test]
    fn test_disabled_logger_never_writes() {
        let lines = Lines::default();
        let mut logger = logger_with(&lines, UlogConfig::default().with_enabled(false));
        logger.init();
        logger.emit(ChannelId::DEFAULT, Severity::Error, "X", format_args!("y"));
        logger.hexdump("B", &[1, 2, 3]);
        logger.deinit();
        assert!(lines.0.borrow().is_empty());
        assert!(!logger.is_running());
    }
}
