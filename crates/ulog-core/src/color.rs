//! ANSI control sequences used by the probe and stdout adapters

use ulog_core_types::Severity;

/// Reset to default colors
pub const CTRL_RESET: &str = "\x1B[0m";
/// Clear screen, reposition cursor to top left
pub const CTRL_CLEAR: &str = "\x1B[2J";

pub const TEXT_RED: &str = "\x1B[2;31m";
pub const TEXT_GREEN: &str = "\x1B[2;32m";
pub const TEXT_YELLOW: &str = "\x1B[2;33m";
pub const TEXT_MAGENTA: &str = "\x1B[2;35m";
pub const TEXT_CYAN: &str = "\x1B[2;36m";
pub const TEXT_WHITE: &str = "\x1B[2;37m";

/// Color-start sequence for a severity; `None` for raw lines
pub fn severity_color(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Assert => Some(TEXT_MAGENTA),
        Severity::Error => Some(TEXT_RED),
        Severity::Warn => Some(TEXT_YELLOW),
        Severity::Info => Some(TEXT_CYAN),
        Severity::Debug => Some(TEXT_GREEN),
        Severity::Verbose => Some(TEXT_WHITE),
        Severity::Raw => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_color() {
        for severity in Severity::LEVELS {
            assert!(severity_color(severity).is_some(), "{severity} has no color");
        }
    }

    #[test]
    fn test_severity_color_mapping() {
        assert_eq!(severity_color(Severity::Assert), Some(TEXT_MAGENTA));
        assert_eq!(severity_color(Severity::Error), Some(TEXT_RED));
        assert_eq!(severity_color(Severity::Warn), Some(TEXT_YELLOW));
        assert_eq!(severity_color(Severity::Info), Some(TEXT_CYAN));
        assert_eq!(severity_color(Severity::Debug), Some(TEXT_GREEN));
        assert_eq!(severity_color(Severity::Verbose), Some(TEXT_WHITE));
        assert_eq!(severity_color(Severity::Raw), None);
    }
}
