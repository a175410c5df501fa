//! ulog Core - embedded logging facade
//!
//! Formats a log line once and fans it out to any combination of backends:
//! - Debug-probe text channel with virtual terminals and ANSI colors
//! - Structured logging library (`tracing`)
//! - Standard output
//!
//! Lines are rendered into a fixed-capacity stack buffer, framed as
//! `[E/TAG] ` and optionally timestamped. A hex dump utility routes its rows
//! through the same backends.

pub mod backend;
pub mod banner;
pub mod color;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod format;
pub mod hexdump;
pub mod line_buffer;
pub mod logging_facility;
pub mod timestamp;

/// `false` when built with the `disabled` feature; every entry point then
/// folds away at compile time.
pub const COMPILED_IN: bool = !cfg!(feature = "disabled");

// Re-export commonly used types
pub use backend::{Backend, LineRecord};
pub use config::{BackendKind, BackendSet, LineEnding, TimestampFormat, UlogConfig};
pub use dispatcher::{Logger, LoggerBuilder};
pub use errors::{Result, UlogError, UlogErrorKind};
pub use line_buffer::LineBuffer;
pub use timestamp::TickSource;
pub use ulog_core_types::{ChannelId, Severity};
