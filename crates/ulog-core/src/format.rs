//! Message formatter
//!
//! Builds one log line: `[<S>/<TAG>] <timestamp> <body>`. The frame and the
//! timestamp are optional; no line terminator is added here, each backend
//! delimits lines the way its transport expects.

use crate::line_buffer::LineBuffer;
use crate::timestamp::Timestamp;
use std::fmt::{self, Write};
use ulog_core_types::Severity;

/// Render one line into `buf`, returning its length
///
/// The buffer is cleared first. Text that does not fit is silently cut at
/// `N - 1` bytes and the buffer stays NUL-terminated.
pub fn format_line<const N: usize>(
    buf: &mut LineBuffer<N>,
    severity: Severity,
    tag: &str,
    timestamp: Option<Timestamp>,
    args: fmt::Arguments<'_>,
) -> usize {
    buf.clear();
    write_frame(buf, severity, tag);
    if let Some(stamp) = timestamp {
        // LineBuffer never reports fmt errors.
        let _ = write!(buf, "{} ", stamp);
    }
    let _ = buf.write_fmt(args);
    buf.len()
}

/// `"[S/TAG] "` with a severity, `"[TAG] "` without one, nothing for an empty tag
fn write_frame<const N: usize>(buf: &mut LineBuffer<N>, severity: Severity, tag: &str) {
    if tag.is_empty() {
        return;
    }
    let _ = match severity.tag_char() {
        Some(c) => write!(buf, "[{}/{}] ", c, tag),
        None => write!(buf, "[{}] ", tag),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimestampFormat;

    fn render(severity: Severity, tag: &str, args: fmt::Arguments<'_>) -> String {
        let mut buf = LineBuffer::<64>::new();
        format_line(&mut buf, severity, tag, None, args);
        buf.as_str().to_string()
    }

    #[test]
    fn test_severity_and_tag_frame() {
        assert_eq!(
            render(Severity::Error, "NET", format_args!("fail {}", 7)),
            "[E/NET] fail 7"
        );
    }

    #[test]
    fn test_tag_only_frame() {
        assert_eq!(
            render(Severity::Raw, "BOOT", format_args!("ready")),
            "[BOOT] ready"
        );
    }

    #[test]
    fn test_no_frame_without_tag() {
        assert_eq!(render(Severity::Warn, "", format_args!("bare")), "bare");
        assert_eq!(render(Severity::Raw, "", format_args!("bare")), "bare");
    }

    #[test]
    fn test_timestamp_follows_frame() {
        let mut buf = LineBuffer::<64>::new();
        let stamp = Timestamp {
            format: TimestampFormat::Millis,
            tick: 1500,
        };
        let len = format_line(
            &mut buf,
            Severity::Info,
            "APP",
            Some(stamp),
            format_args!("up"),
        );
        assert_eq!(buf.as_str(), "[I/APP] [1500 ms] up");
        assert_eq!(len, buf.as_str().len());
    }

    #[test]
    fn test_returned_length_matches_text() {
        let mut buf = LineBuffer::<64>::new();
        let len = format_line(&mut buf, Severity::Debug, "X", None, format_args!("{}", 12));
        assert_eq!(len, "[D/X] 12".len());
    }

    #[test]
    fn test_truncation_at_capacity() {
        let mut buf = LineBuffer::<10>::new();
        let len = format_line(
            &mut buf,
            Severity::Error,
            "NET",
            None,
            format_args!("a long message"),
        );
        assert_eq!(len, 9);
        assert_eq!(buf.as_str(), "[E/NET] a");
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
        assert!(buf.is_truncated());
    }

    #[test]
    fn test_frame_longer_than_capacity() {
        let mut buf = LineBuffer::<4>::new();
        format_line(&mut buf, Severity::Info, "TAG", None, format_args!("body"));
        assert_eq!(buf.as_str(), "[I/");
    }

    #[test]
    fn test_buffer_reused_between_lines() {
        let mut buf = LineBuffer::<32>::new();
        format_line(&mut buf, Severity::Info, "A", None, format_args!("first line"));
        format_line(&mut buf, Severity::Info, "A", None, format_args!("2nd"));
        assert_eq!(buf.as_str(), "[I/A] 2nd");
    }
}
