//! Host-side logging facility for ulog
//!
//! The structured backend speaks `tracing`; this module owns the subscriber
//! side of that conversation:
//! - Single initialization point via `init(profile)`
//! - Severity entry-point macros (`ulog_e!`, `ulog_i!`, `ulog_raw!`, `ulog_hex!` ...)
//! - Test capture mode for deterministic assertions on structured output
//!
//! # Usage
//!
//! ```rust
//! use ulog_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
