//! Log severity vocabulary
//!
//! Levels mirror the Android logcat scale: `Assert` is the most important,
//! `Verbose` the most detailed. `Raw` is not a level; it marks a line that
//! carries neither a severity nor a tag frame.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Assertion failure, highest priority
    Assert,
    Error,
    Warn,
    Info,
    Debug,
    /// Most detailed output
    Verbose,
    /// No severity and no tag framing
    Raw,
}

impl Severity {
    /// All framed severities, most important first
    pub const LEVELS: [Severity; 6] = [
        Severity::Assert,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
    ];

    /// Single-character tag used in the `[E/TAG]` frame
    pub fn tag_char(self) -> Option<char> {
        match self {
            Severity::Assert => Some('A'),
            Severity::Error => Some('E'),
            Severity::Warn => Some('W'),
            Severity::Info => Some('I'),
            Severity::Debug => Some('D'),
            Severity::Verbose => Some('V'),
            Severity::Raw => None,
        }
    }

    /// Map a frame character back to a severity
    ///
    /// Unknown characters map to `Raw`.
    pub fn from_char(c: char) -> Self {
        match c {
            'A' => Severity::Assert,
            'E' => Severity::Error,
            'W' => Severity::Warn,
            'I' => Severity::Info,
            'D' => Severity::Debug,
            'V' => Severity::Verbose,
            _ => Severity::Raw,
        }
    }

    /// Numeric level (Assert = 0 .. Verbose = 5); `None` for `Raw`
    pub fn level(self) -> Option<u8> {
        match self {
            Severity::Assert => Some(0),
            Severity::Error => Some(1),
            Severity::Warn => Some(2),
            Severity::Info => Some(3),
            Severity::Debug => Some(4),
            Severity::Verbose => Some(5),
            Severity::Raw => None,
        }
    }

    /// Whether this line carries a severity frame
    pub fn is_framed(self) -> bool {
        self != Severity::Raw
    }

    /// Lowercase name, as used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Assert => "assert",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Verbose => "verbose",
            Severity::Raw => "raw",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts the lowercase name (`"warn"`) or the frame character (`"W"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "assert" | "a" => Ok(Severity::Assert),
            "error" | "e" => Ok(Severity::Error),
            "warn" | "w" => Ok(Severity::Warn),
            "info" | "i" => Ok(Severity::Info),
            "debug" | "d" => Ok(Severity::Debug),
            "verbose" | "v" => Ok(Severity::Verbose),
            "raw" => Ok(Severity::Raw),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
