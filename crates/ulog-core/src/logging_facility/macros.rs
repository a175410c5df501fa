//! Severity entry points
//!
//! Every macro is sugar over [`Logger::emit_with_defaults`]; the format
//! string and arguments follow `format_args!`. Each severity macro accepts
//! four shapes:
//!
//! ```text
//! ulog_e!(logger, "fmt", args...)                      // default tag, default channel
//! ulog_e!(logger, tag = "NET", "fmt", args...)         // explicit tag
//! ulog_e!(logger, channel = 2, "fmt", args...)         // explicit channel
//! ulog_e!(logger, channel = 2, tag = "NET", "fmt", ...) // both
//! ```
//!
//! With the `disabled` feature the guarded branch is constant-false and the
//! calls compile to nothing.
//!
//! [`Logger::emit_with_defaults`]: crate::Logger::emit_with_defaults

/// Emit a line at an explicit severity
///
/// # Example
///
/// ```
/// # use ulog_core::{ulog, BackendSet, Logger, Severity, UlogConfig};
/// # let config = UlogConfig::default().with_backends(BackendSet::NONE);
/// # let mut logger: Logger = Logger::builder(config).build().unwrap();
/// ulog!(Severity::Warn, logger, tag = "PWR", "battery at {}%", 9);
/// ```
#[macro_export]
macro_rules! ulog {
    ($severity:expr, $logger:expr, channel = $channel:expr, tag = $tag:expr, $($arg:tt)+) => {
        if $crate::COMPILED_IN {
            $logger.emit_with_defaults(
                Some($crate::ChannelId::from($channel)),
                $severity,
                Some($tag),
                format_args!($($arg)+),
            );
        }
    };
    ($severity:expr, $logger:expr, channel = $channel:expr, $($arg:tt)+) => {
        if $crate::COMPILED_IN {
            $logger.emit_with_defaults(
                Some($crate::ChannelId::from($channel)),
                $severity,
                None,
                format_args!($($arg)+),
            );
        }
    };
    ($severity:expr, $logger:expr, tag = $tag:expr, $($arg:tt)+) => {
        if $crate::COMPILED_IN {
            $logger.emit_with_defaults(None, $severity, Some($tag), format_args!($($arg)+));
        }
    };
    ($severity:expr, $logger:expr, $($arg:tt)+) => {
        if $crate::COMPILED_IN {
            $logger.emit_with_defaults(None, $severity, None, format_args!($($arg)+));
        }
    };
}

/// Assert-level line
#[macro_export]
macro_rules! ulog_a {
    ($($arg:tt)+) => { $crate::ulog!($crate::Severity::Assert, $($arg)+) };
}

/// Error-level line
#[macro_export]
macro_rules! ulog_e {
    ($($arg:tt)+) => { $crate::ulog!($crate::Severity::Error, $($arg)+) };
}

/// Warn-level line
#[macro_export]
macro_rules! ulog_w {
    ($($arg:tt)+) => { $crate::ulog!($crate::Severity::Warn, $($arg)+) };
}

/// Info-level line
#[macro_export]
macro_rules! ulog_i {
    ($($arg:tt)+) => { $crate::ulog!($crate::Severity::Info, $($arg)+) };
}

/// Debug-level line
#[macro_export]
macro_rules! ulog_d {
    ($($arg:tt)+) => { $crate::ulog!($crate::Severity::Debug, $($arg)+) };
}

/// Verbose-level line
#[macro_export]
macro_rules! ulog_v {
    ($($arg:tt)+) => { $crate::ulog!($crate::Severity::Verbose, $($arg)+) };
}

/// Unframed line: no severity, no tag, default channel
#[macro_export]
macro_rules! ulog_raw {
    ($logger:expr, $($arg:tt)+) => {
        if $crate::COMPILED_IN {
            $logger.raw(format_args!($($arg)+));
        }
    };
}

/// Hex dump with the configured row width
///
/// # Example
///
/// ```
/// # use ulog_core::{ulog_hex, BackendSet, Logger, UlogConfig};
/// # let config = UlogConfig::default().with_backends(BackendSet::NONE);
/// # let mut logger: Logger = Logger::builder(config).build().unwrap();
/// let frame = [0x0Au8, 0x1B, 0x2C];
/// ulog_hex!(logger, "FRAME", &frame);
/// ```
#[macro_export]
macro_rules! ulog_hex {
    ($logger:expr, $name:expr, $data:expr) => {
        if $crate::COMPILED_IN {
            $logger.hexdump($name, $data);
        }
    };
}
