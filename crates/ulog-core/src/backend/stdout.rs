//! Standard output backend

use super::{Backend, LineRecord};
use crate::color::{severity_color, CTRL_RESET};
use crate::config::LineEnding;
use std::io::{self, Write};

/// Writes lines to stdout, or to any other byte sink given to `with_writer`
pub struct StdoutBackend<W = io::Stdout> {
    out: W,
    color: bool,
    line_ending: LineEnding,
}

impl StdoutBackend<io::Stdout> {
    pub fn new(color: bool, line_ending: LineEnding) -> Self {
        Self::with_writer(io::stdout(), color, line_ending)
    }
}

impl<W: Write> StdoutBackend<W> {
    pub fn with_writer(out: W, color: bool, line_ending: LineEnding) -> Self {
        Self {
            out,
            color,
            line_ending,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_parts(&mut self, parts: &[&str]) -> io::Result<()> {
        for part in parts {
            self.out.write_all(part.as_bytes())?;
        }
        self.out.write_all(self.line_ending.as_str().as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Backend for StdoutBackend<W> {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn write_line(&mut self, record: &LineRecord<'_>) {
        let color = if self.color {
            severity_color(record.severity)
        } else {
            None
        };
        let result = match color {
            Some(color) => self.write_parts(&[color, record.text, CTRL_RESET]),
            None => self.write_parts(&[record.text]),
        };
        // A closed stdout must not take the caller down.
        result.ok();
    }
}
