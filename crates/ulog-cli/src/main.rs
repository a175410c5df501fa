//! ulog CLI
//!
//! Host front end for the logging facade: emit lines, dump bytes, show the
//! banner, through whichever backends the configuration selects.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ulog_core::logging_facility::{self, Profile};
use ulog_core::{BackendSet, TimestampFormat};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ulog")]
#[command(about = "ulog - format once, log everywhere", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backends to enable: "all", "none" or a list such as "probe,stdout"
    #[arg(long, global = true)]
    backends: Option<BackendSet>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Timestamp prefix: millis or elapsed
    #[arg(long, global = true)]
    timestamp: Option<TimestampFormat>,

    /// Subscriber profile for the structured backend (dev, prod)
    #[arg(long, global = true, default_value = "dev")]
    profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one log line
    Emit(commands::emit::EmitArgs),
    /// Hex dump a byte string
    Hexdump(commands::hexdump::HexdumpArgs),
    /// Start the facade and print the boot banner
    Banner(commands::banner::BannerArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.profile);

    let overrides = commands::Overrides {
        config: cli.config,
        backends: cli.backends,
        no_color: cli.no_color,
        timestamp: cli.timestamp,
    };

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(&overrides, args),
        Commands::Hexdump(args) => commands::hexdump::execute(&overrides, args),
        Commands::Banner(args) => commands::banner::execute(&overrides, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
