use thiserror::Error;

/// Result type alias using UlogError
pub type Result<T> = std::result::Result<T, UlogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Emitting a line never fails; errors only surface while loading a
/// configuration or assembling a `Logger`. Each kind maps to a stable code
/// that tests and the CLI can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UlogErrorKind {
    /// A configuration value is out of range
    InvalidConfig,
    /// A selected backend has nothing to write to
    MissingBackend,
    /// A configuration document could not be parsed
    ConfigParse,
    Io,
}

impl UlogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            UlogErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            UlogErrorKind::MissingBackend => "ERR_MISSING_BACKEND",
            UlogErrorKind::ConfigParse => "ERR_CONFIG_PARSE",
            UlogErrorKind::Io => "ERR_IO",
        }
    }
}

/// Errors raised at the configuration and construction seam
#[derive(Error, Debug)]
pub enum UlogError {
    /// Hex dump rows must hold at least one byte
    #[error("Invalid hex dump width: {width} (must be at least 1)")]
    InvalidHexWidth { width: u8 },

    /// Default channel does not address a probe terminal
    #[error("Channel {channel} is out of range (max {max})")]
    ChannelOutOfRange { channel: u8, max: u8 },

    /// The default tag frames every default-tag line and cannot be empty
    #[error("Default tag must not be empty")]
    EmptyDefaultTag,

    /// The probe backend is selected but no transport was supplied
    #[error("Probe backend selected but no probe transport was provided")]
    MissingProbeTransport,

    /// Configuration document is not valid TOML or has bad values
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl UlogError {
    /// Classify this error
    pub fn kind(&self) -> UlogErrorKind {
        match self {
            UlogError::InvalidHexWidth { .. }
            | UlogError::ChannelOutOfRange { .. }
            | UlogError::EmptyDefaultTag => UlogErrorKind::InvalidConfig,
            UlogError::MissingProbeTransport => UlogErrorKind::MissingBackend,
            UlogError::ConfigParse(_) => UlogErrorKind::ConfigParse,
            UlogError::ConfigRead { .. } => UlogErrorKind::Io,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

// ========== End Error Facility ==========
