//! Test capture mode for deterministic logging assertions
//!
//! A test-only subscriber layer that records every `tracing` event in
//! memory, so tests can assert on what the structured backend emitted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use ulog_core_types::schema::{FIELD_ASSERT, FIELD_MESSAGE, FIELD_RAW, FIELD_TAG};

/// A captured event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub tag: Option<String>,
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Event came through the untagged raw primitive
    pub fn is_raw(&self) -> bool {
        self.flag(FIELD_RAW)
    }

    /// Event came through the assert primitive
    pub fn is_assert(&self) -> bool {
        self.flag(FIELD_ASSERT)
    }

    fn flag(&self, key: &str) -> bool {
        self.fields.get(key).map(String::as_str) == Some("true")
    }
}

struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer for collecting events
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            tag: visitor.fields.get(FIELD_TAG).cloned(),
            message: visitor.fields.get(FIELD_MESSAGE).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events whose message contains `needle`
    pub fn events_containing(&self, needle: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message.as_deref().is_some_and(|m| m.contains(needle)))
            .collect()
    }

    /// Assert that an event exists with the given tag and message
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_line_exists(&self, tag: &str, message: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.tag.as_deref() == Some(tag) && e.message.as_deref() == Some(message));
        assert!(
            found,
            "Expected event tag={} message={:?} not found in {} captured events",
            tag,
            message,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first use and
/// returns the shared capture handle. Tests in one binary share it, so
/// filter by something unique to the test (a tag, a message).
/// `init(Profile::Test)` installs the same layer. When a different global
/// subscriber is already in place the handle stays empty.
///
/// # Example
///
/// ```
/// use ulog_core::logging_facility::test_capture::init_test_capture;
/// use ulog_core::{BackendSet, Logger, UlogConfig};
///
/// let capture = init_test_capture();
/// let config = UlogConfig::default().with_backends(BackendSet::STRUCTURED);
/// let mut logger: Logger = Logger::builder(config).build().unwrap();
/// ulog_core::ulog_w!(logger, tag = "DOC", "low {}", 3);
/// capture.assert_line_exists("DOC", "[W/DOC] low 3");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}
