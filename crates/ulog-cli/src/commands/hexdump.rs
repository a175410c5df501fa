//! Hexdump command
//!
//! Usage: ulog hexdump [--name NAME] [--width W] HEX

use super::{start_logger, Overrides};
use clap::Args;

#[derive(Debug, Args)]
pub struct HexdumpArgs {
    /// Title of the dump
    #[arg(short, long, default_value = "DATA")]
    pub name: String,

    /// Bytes per row (default: configured hex width)
    #[arg(short, long)]
    pub width: Option<u8>,

    /// Bytes as hex digits; whitespace is ignored
    pub hex: String,
}

/// Execute hexdump command
pub fn execute(
    overrides: &Overrides,
    args: HexdumpArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let digits: String = args.hex.split_whitespace().collect();
    let data = hex::decode(&digits).map_err(|e| format!("Invalid hex input: {}", e))?;

    let config = overrides.resolve()?.with_banner(false);
    let mut logger = start_logger(config)?;
    tracing::debug!(name = %args.name, bytes = data.len(), "hexdump");

    match args.width {
        Some(width) => logger.hexdump_with_width(&args.name, width, &data),
        None => logger.hexdump(&args.name, &data),
    }

    logger.deinit();
    Ok(())
}
