use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use ulog_core::backend::ProbeTransport;
use ulog_core::{Backend, BackendSet, ChannelId, LineRecord, Logger, Severity, UlogConfig};

/// A line as seen by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub channel: ChannelId,
    pub severity: Severity,
    pub tag: String,
    pub text: String,
}

/// Backend that keeps every line it receives
#[derive(Clone, Default)]
pub struct RecordingBackend {
    name: &'static str,
    lines: Rc<RefCell<Vec<Recorded>>>,
    starts: Rc<RefCell<usize>>,
    stops: Rc<RefCell<usize>>,
}

#[allow(dead_code)]
impl RecordingBackend {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<Recorded> {
        self.lines.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|l| l.text.clone()).collect()
    }

    pub fn starts(&self) -> usize {
        *self.starts.borrow()
    }

    pub fn stops(&self) -> usize {
        *self.stops.borrow()
    }
}

impl Backend for RecordingBackend {
    fn name(&self) -> &'static str {
        if self.name.is_empty() {
            "recording"
        } else {
            self.name
        }
    }

    fn start(&mut self) {
        *self.starts.borrow_mut() += 1;
    }

    fn stop(&mut self) {
        *self.stops.borrow_mut() += 1;
    }

    fn write_line(&mut self, record: &LineRecord<'_>) {
        self.lines.borrow_mut().push(Recorded {
            channel: record.channel,
            severity: record.severity,
            tag: record.tag.to_string(),
            text: record.text.to_string(),
        });
    }
}

/// In-memory byte sink that stays readable after being moved into a backend
#[derive(Clone, Default)]
pub struct SharedWriter(Rc<RefCell<Vec<u8>>>);

#[allow(dead_code)]
impl SharedWriter {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Probe transport recording terminal selections and writes
#[derive(Clone, Default)]
pub struct RecordingProbe {
    pub inits: Rc<RefCell<usize>>,
    pub terminals: Rc<RefCell<Vec<ChannelId>>>,
    pub writes: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingProbe {
    /// Everything written, concatenated
    pub fn output(&self) -> String {
        self.writes.borrow().concat()
    }
}

impl ProbeTransport for RecordingProbe {
    fn init(&mut self) {
        *self.inits.borrow_mut() += 1;
    }

    fn set_terminal(&mut self, channel: ChannelId) {
        self.terminals.borrow_mut().push(channel);
    }

    fn write_str(&mut self, s: &str) {
        self.writes.borrow_mut().push(s.to_string());
    }
}

/// Logger with no built-in backends and a single recorder
#[allow(dead_code)]
pub fn recording_logger(config: UlogConfig) -> (Logger, RecordingBackend) {
    let recorder = RecordingBackend::default();
    let logger = Logger::builder(config.with_backends(BackendSet::NONE))
        .backend(recorder.clone())
        .build()
        .unwrap();
    (logger, recorder)
}
