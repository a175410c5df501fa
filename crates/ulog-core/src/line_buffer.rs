//! Fixed-capacity line buffer
//!
//! Every rendered line lives in a `LineBuffer<N>` on the caller's stack.
//! Writes that would overflow are cut at the last whole UTF-8 character that
//! fits, one byte is always held back for the NUL terminator, and nothing is
//! ever written past the end of the array.

use std::fmt;

/// Stack-allocated, NUL-terminated text buffer of `N` bytes
pub struct LineBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    const NON_ZERO: () = assert!(N > 0, "line buffer capacity must be non-zero");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self {
            bytes: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// Total size of the backing array, terminator included
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Longest text the buffer can hold (`N - 1`)
    pub const fn max_text_len(&self) -> usize {
        N - 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any write was cut short since the last `clear`
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn remaining(&self) -> usize {
        self.max_text_len() - self.len
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
        self.bytes[0] = 0;
    }

    /// Append as much of `s` as fits, returning the number of bytes taken
    ///
    /// After the first cut nothing more is appended, so the text is always
    /// a prefix of what an unbounded buffer would hold.
    pub fn push_str(&mut self, s: &str) -> usize {
        if self.truncated {
            return 0;
        }
        let mut take = s.len().min(self.remaining());
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.truncated = true;
        }
        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.bytes[self.len] = 0;
        take
    }

    /// Rendered text, without the terminator
    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// Rendered text followed by its NUL terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    /// Never fails; overflow is recorded in `is_truncated`
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &N)
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}
