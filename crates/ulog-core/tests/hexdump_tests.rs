#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{recording_logger, SharedWriter};
use ulog_core::{ulog_hex, BackendSet, ChannelId, LineEnding, Logger, Severity, UlogConfig};

fn config() -> UlogConfig {
    UlogConfig::default().with_banner(false)
}

#[test]
fn test_title_and_single_short_row() {
    let (mut logger, recorder) = recording_logger(config());

    logger.hexdump_with_width("BUF", 4, &[0x0A, 0x1B, 0x2C]);

    assert_eq!(recorder.texts(), vec!["=== BUF ===", "0000: 0A 1B 2C "]);
}

#[test]
fn test_empty_data_writes_only_the_title() {
    let (mut logger, recorder) = recording_logger(config());
    logger.hexdump("EMPTY", &[]);
    assert_eq!(recorder.texts(), vec!["=== EMPTY ==="]);
}

#[test]
fn test_row_count_and_tail_row() {
    let (mut logger, recorder) = recording_logger(config());
    let data: Vec<u8> = (0u8..37).collect();

    logger.hexdump("SEQ", &data);

    let texts = recorder.texts();
    // title + ceil(37 / 16) rows
    assert_eq!(texts.len(), 1 + 3);
    assert!(texts[1].starts_with("0000: 00 01 02"));
    assert!(texts[2].starts_with("0010: 10 11"));
    assert_eq!(texts[3], "0020: 20 21 22 23 24 ");
}

#[test]
fn test_configured_width_is_used() {
    let (mut logger, recorder) = recording_logger(config().with_hex_width(2));
    ulog_hex!(logger, "PAIR", &[1, 2, 3, 4, 5]);
    assert_eq!(
        recorder.texts(),
        vec!["=== PAIR ===", "0000: 01 02 ", "0002: 03 04 ", "0004: 05 "]
    );
}

#[test]
fn test_zero_width_treated_as_one() {
    let (mut logger, recorder) = recording_logger(config());
    logger.hexdump_with_width("ONE", 0, &[0xAB, 0xCD]);
    assert_eq!(
        recorder.texts(),
        vec!["=== ONE ===", "0000: AB ", "0001: CD "]
    );
}

#[test]
fn test_rows_are_raw_records_on_default_channel() {
    let (mut logger, recorder) =
        recording_logger(config().with_default_channel(ChannelId::new(2)));

    logger.hexdump("RAW", &[0xFF]);

    for line in recorder.lines() {
        assert_eq!(line.severity, Severity::Raw);
        assert_eq!(line.channel, ChannelId::new(2));
        assert!(line.tag.is_empty());
    }
}

#[test]
fn test_rows_carry_no_timestamp_or_color() {
    let stdout = SharedWriter::default();
    let config = config()
        .with_color(true)
        .with_line_ending(LineEnding::Lf)
        .with_timestamp(Some(ulog_core::TimestampFormat::Millis))
        .with_backends(BackendSet::STDOUT);
    let mut logger: Logger = Logger::builder(config)
        .stdout_writer(stdout.clone())
        .tick_source(|| 99u32)
        .build()
        .unwrap();

    logger.hexdump("PLAIN", &[0x00, 0x7F]);

    assert_eq!(stdout.contents(), "=== PLAIN ===\n0000: 00 7F \n");
}

#[test]
fn test_row_text_truncated_by_line_capacity() {
    let recorder = common::RecordingBackend::default();
    let config = config().with_backends(BackendSet::NONE);
    let mut logger: Logger<12> = Logger::builder(config)
        .backend(recorder.clone())
        .build()
        .unwrap();

    logger.hexdump_with_width("T", 8, &[1, 2, 3, 4, 5, 6, 7, 8]);

    let texts = recorder.texts();
    assert_eq!(texts[1], "0000: 01 02");
    assert!(texts.iter().all(|t| t.len() <= 11));
}
