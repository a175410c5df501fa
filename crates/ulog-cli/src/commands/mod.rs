//! Subcommands and the logger setup they share

use std::io;
use std::path::PathBuf;
use ulog_core::backend::VirtualTerminalWriter;
use ulog_core::{BackendSet, Logger, TimestampFormat, UlogConfig};

pub mod banner;
pub mod emit;
pub mod hexdump;

/// Global flags layered over the configuration file
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub backends: Option<BackendSet>,
    pub no_color: bool,
    pub timestamp: Option<TimestampFormat>,
}

impl Overrides {
    /// Load the configuration file (or defaults) and apply the flags
    pub fn resolve(&self) -> Result<UlogConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => UlogConfig::load(path)?,
            None => UlogConfig::default(),
        };
        if let Some(backends) = self.backends {
            config = config.with_backends(backends);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        if self.timestamp.is_some() {
            config = config.with_timestamp(self.timestamp);
        }
        Ok(config)
    }
}

/// Build and start a logger; the probe channel is emulated on stderr
pub fn start_logger(config: UlogConfig) -> Result<Logger, Box<dyn std::error::Error>> {
    let mut logger = Logger::builder(config)
        .probe_transport(VirtualTerminalWriter::new(io::stderr()))
        .build()?;
    logger.init();
    Ok(logger)
}
