//! Canonical schema constants for structured log events
//!
//! These keys are shared by the tracing-backed backend and the test capture
//! layer so both sides agree on field names.

/// Target used for every line forwarded to the structured backend
pub const TARGET_LINES: &str = "ulog";
/// Target used for the facade's own lifecycle diagnostics
pub const TARGET_FACILITY: &str = "ulog::facility";

// Canonical field keys
pub const FIELD_TAG: &str = "tag";
pub const FIELD_MESSAGE: &str = "message";

// Markers for lines without a native tracing level
pub const FIELD_RAW: &str = "raw";
pub const FIELD_ASSERT: &str = "assert";
