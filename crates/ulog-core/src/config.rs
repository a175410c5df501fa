//! Facade configuration
//!
//! A `UlogConfig` is built once at startup (in code or from a TOML document)
//! and handed to the `Logger` builder. It never changes afterwards.

use crate::errors::{Result, UlogError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use ulog_core_types::{ChannelId, Severity};

/// Default capacity of the per-call line buffer, in bytes
pub const DEFAULT_LINE_CAPACITY: usize = 512;
/// Default number of bytes per hex dump row
pub const DEFAULT_HEX_WIDTH: u8 = 16;
/// Default tag for the default-tag entry points
pub const DEFAULT_TAG: &str = "MAIN";

/// One of the sinks a rendered line can be delivered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Debug-probe text channel
    Probe,
    /// Structured logging library (tracing)
    Structured,
    /// Process standard output
    Stdout,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [
        BackendKind::Probe,
        BackendKind::Structured,
        BackendKind::Stdout,
    ];

    /// Bit of this backend inside a `BackendSet`
    pub fn bit(self) -> u8 {
        match self {
            BackendKind::Probe => 0x01,
            BackendKind::Structured => 0x02,
            BackendKind::Stdout => 0x04,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Probe => "probe",
            BackendKind::Structured => "structured",
            BackendKind::Stdout => "stdout",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "probe" | "rtt" => Ok(BackendKind::Probe),
            "structured" | "tracing" => Ok(BackendKind::Structured),
            "stdout" | "printf" => Ok(BackendKind::Stdout),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}

/// Bitmask of active backends
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<BackendKind>", into = "Vec<BackendKind>")]
pub struct BackendSet(u8);

impl BackendSet {
    pub const NONE: BackendSet = BackendSet(0);
    pub const PROBE: BackendSet = BackendSet(0x01);
    pub const STRUCTURED: BackendSet = BackendSet(0x02);
    pub const STDOUT: BackendSet = BackendSet(0x04);
    pub const ALL: BackendSet = BackendSet(0x07);

    pub fn contains(self, kind: BackendKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn with(self, kind: BackendKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Selected backends in delivery order (probe, structured, stdout)
    pub fn iter(self) -> impl Iterator<Item = BackendKind> {
        BackendKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl std::ops::BitOr for BackendSet {
    type Output = BackendSet;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Vec<BackendKind>> for BackendSet {
    fn from(kinds: Vec<BackendKind>) -> Self {
        kinds.into_iter().fold(BackendSet::NONE, BackendSet::with)
    }
}

impl From<BackendSet> for Vec<BackendKind> {
    fn from(set: BackendSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for BackendSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromStr for BackendSet {
    type Err = String;

    /// Parses `"all"`, `"none"` or a comma separated list such as `"probe,stdout"`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "all" => return Ok(BackendSet::ALL),
            "none" | "" => return Ok(BackendSet::NONE),
            _ => {}
        }
        s.split(',')
            .map(BackendKind::from_str)
            .try_fold(BackendSet::NONE, |set, kind| -> std::result::Result<BackendSet, String> {
                Ok(set.with(kind?))
            })
    }
}

/// How the timestamp prefix is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// `[1234 ms]`
    Millis,
    /// `[00d-00h:00m:01s^234ms]`
    Elapsed,
}

impl FromStr for TimestampFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "millis" | "ms" => Ok(TimestampFormat::Millis),
            "elapsed" => Ok(TimestampFormat::Elapsed),
            other => Err(format!("unknown timestamp format '{}'", other)),
        }
    }
}

/// Terminator the probe and stdout adapters append to every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    None,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Process-wide facade configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UlogConfig {
    /// Master switch; when off every entry point is a no-op
    pub enabled: bool,
    /// Active backend set
    pub backends: BackendSet,
    /// Declared minimum severity. Stored and reported, not enforced.
    pub min_severity: Severity,
    /// Tag used by the default-tag entry points
    pub default_tag: String,
    /// Write the startup banner on `Logger::init`
    pub banner: bool,
    /// Wrap probe and stdout lines in ANSI color sequences
    pub color: bool,
    /// Timestamp prefix, if any
    pub timestamp: Option<TimestampFormat>,
    /// Bytes per hex dump row
    pub hex_width: u8,
    /// Probe terminal used by the default-channel entry points
    pub default_channel: ChannelId,
    /// Terminator appended by the probe and stdout adapters
    pub line_ending: LineEnding,
}

impl Default for UlogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backends: BackendSet::STDOUT,
            min_severity: Severity::Verbose,
            default_tag: DEFAULT_TAG.to_string(),
            banner: true,
            color: true,
            timestamp: None,
            hex_width: DEFAULT_HEX_WIDTH,
            default_channel: ChannelId::DEFAULT,
            line_ending: LineEnding::CrLf,
        }
    }
}

impl UlogConfig {
    /// Parse and validate a TOML configuration document
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML or unknown keys, and the
    /// validation errors of [`UlogConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: UlogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` when the file cannot be read, otherwise the
    /// errors of [`UlogConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| UlogError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidHexWidth`, `ChannelOutOfRange` or `EmptyDefaultTag`.
    pub fn validate(&self) -> Result<()> {
        if self.hex_width == 0 {
            return Err(UlogError::InvalidHexWidth {
                width: self.hex_width,
            });
        }
        if !self.default_channel.is_valid() {
            return Err(UlogError::ChannelOutOfRange {
                channel: self.default_channel.get(),
                max: ChannelId::MAX.get(),
            });
        }
        if self.default_tag.is_empty() {
            return Err(UlogError::EmptyDefaultTag);
        }
        Ok(())
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_backends(mut self, backends: BackendSet) -> Self {
        self.backends = backends;
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_timestamp(mut self, format: Option<TimestampFormat>) -> Self {
        self.timestamp = format;
        self
    }

    pub fn with_hex_width(mut self, width: u8) -> Self {
        self.hex_width = width;
        self
    }

    pub fn with_default_channel(mut self, channel: ChannelId) -> Self {
        self.default_channel = channel;
        self
    }

    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let config = UlogConfig::default();
        assert!(config.enabled);
        assert_eq!(config.backends, BackendSet::STDOUT);
        assert_eq!(config.default_tag, "MAIN");
        assert_eq!(config.hex_width, 16);
        assert_eq!(config.timestamp, None);
        assert!(config.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backend_set_bits() {
        let set = BackendSet::PROBE | BackendSet::STDOUT;
        assert!(set.contains(BackendKind::Probe));
        assert!(!set.contains(BackendKind::Structured));
        assert!(set.contains(BackendKind::Stdout));
        assert_eq!(set.bits(), 0x05);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![BackendKind::Probe, BackendKind::Stdout]
        );
    }

    #[test]
    fn test_backend_set_from_str() {
        assert_eq!("all".parse::<BackendSet>().unwrap(), BackendSet::ALL);
        assert_eq!("none".parse::<BackendSet>().unwrap(), BackendSet::NONE);
        assert_eq!(
            "stdout, probe".parse::<BackendSet>().unwrap(),
            BackendSet::PROBE | BackendSet::STDOUT
        );
        assert!("stdout,disk".parse::<BackendSet>().is_err());
    }

    #[test]
    fn test_zero_hex_width_rejected() {
        let err = UlogConfig::default().with_hex_width(0).validate().unwrap_err();
        assert!(matches!(err, UlogError::InvalidHexWidth { width: 0 }));
    }

    #[test]
    fn test_channel_out_of_range_rejected() {
        let err = UlogConfig::default()
            .with_default_channel(ChannelId::new(16))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            UlogError::ChannelOutOfRange {
                channel: 16,
                max: 15
            }
        ));
    }

    #[test]
    fn test_empty_default_tag_rejected() {
        let err = UlogConfig::default()
            .with_default_tag("")
            .validate()
            .unwrap_err();
        assert!(matches!(err, UlogError::EmptyDefaultTag));
    }

    #[test]
    fn test_line_ending_text() {
        assert_eq!(LineEnding::None.as_str(), "");
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }
}
