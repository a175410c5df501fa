//! Core types shared across the ulog facade
//!
//! This crate provides the vocabulary used by the formatter, the backend
//! adapters and the command-line driver:
//!
//! - **Severity**: Assert through Verbose, plus the unframed `Raw` mode
//! - **Channel ids**: probe-channel virtual terminal selectors
//! - **Schema constants**: canonical field keys for structured events

pub mod channel;
pub mod schema;
pub mod severity;

pub use channel::ChannelId;
pub use severity::Severity;
