//! Emit command
//!
//! Usage: ulog emit [--severity S] [--tag T] [--channel N] MESSAGE...

use super::{start_logger, Overrides};
use clap::Args;
use ulog_core::{ChannelId, Severity, UlogError};

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity name or frame character (assert, error, warn, info, debug, verbose, raw)
    #[arg(short, long, default_value = "info")]
    pub severity: Severity,

    /// Tag (default: configured default tag)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Probe terminal (default: configured default channel)
    #[arg(short, long)]
    pub channel: Option<u8>,

    /// Message words, joined with single spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Execute emit command
pub fn execute(overrides: &Overrides, args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let channel = args.channel.map(ChannelId::new);
    if let Some(channel) = channel.filter(|c| !c.is_valid()) {
        return Err(UlogError::ChannelOutOfRange {
            channel: channel.get(),
            max: ChannelId::MAX.get(),
        }
        .into());
    }

    let config = overrides.resolve()?.with_banner(false);
    let mut logger = start_logger(config)?;
    let message = args.message.join(" ");

    if args.severity == Severity::Raw {
        logger.raw(format_args!("{}", message));
    } else {
        logger.emit_with_defaults(
            channel,
            args.severity,
            args.tag.as_deref(),
            format_args!("{}", message),
        );
    }

    logger.deinit();
    Ok(())
}
