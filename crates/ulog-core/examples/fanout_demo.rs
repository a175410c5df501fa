//! Fan-out demo
//!
//! One logger, three sinks:
//! - stdout with colors and CRLF line endings
//! - the structured backend, printed by the development subscriber on stderr
//! - a probe channel emulated over stderr, terminal switches included
//!
//! Run with `cargo run -p ulog-core --example fanout_demo`.

use std::io;
use ulog_core::backend::VirtualTerminalWriter;
use ulog_core::logging_facility::{init, Profile};
use ulog_core::{ulog_d, ulog_e, ulog_hex, ulog_i, ulog_raw, ulog_w};
use ulog_core::{BackendSet, Logger, TimestampFormat, UlogConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    let config = UlogConfig::default()
        .with_backends(BackendSet::ALL)
        .with_default_tag("DEMO")
        .with_timestamp(Some(TimestampFormat::Elapsed))
        .with_hex_width(8);

    let mut logger: Logger = Logger::builder(config)
        .probe_transport(VirtualTerminalWriter::new(io::stderr()))
        .build()?;

    logger.init();

    let names = logger.backend_names();
    ulog_i!(logger, "backends: {:?}", names);
    ulog_w!(logger, tag = "PWR", "battery at {}%", 9);
    ulog_e!(logger, channel = 1, tag = "NET", "link down after {} retries", 3);
    ulog_d!(logger, channel = 2, "switched terminal");
    ulog_raw!(logger, "-- raw line, no frame --");

    let frame: Vec<u8> = (0u8..20).map(|b| b.wrapping_mul(13)).collect();
    ulog_hex!(logger, "FRAME", &frame);

    logger.deinit();
    Ok(())
}
