//! Banner command
//!
//! Usage: ulog banner [--clear]

use super::{start_logger, Overrides};
use clap::Args;
use std::io::Write;
use ulog_core::color::CTRL_CLEAR;

#[derive(Debug, Args)]
pub struct BannerArgs {
    /// Clear the terminal before printing
    #[arg(long)]
    pub clear: bool,
}

/// Execute banner command
pub fn execute(overrides: &Overrides, args: BannerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = overrides.resolve()?.with_banner(true);
    if args.clear {
        let mut out = std::io::stdout();
        out.write_all(CTRL_CLEAR.as_bytes())?;
        out.flush()?;
    }
    let mut logger = start_logger(config)?;
    logger.deinit();
    Ok(())
}
