//! Hex dump rendering
//!
//! A dump is a title line `=== <name> ===` followed by one row per `width`
//! bytes: `<offset>: <byte> <byte> ... `, offsets as at least four uppercase
//! hex digits and bytes as two. The last row may be short.

use crate::line_buffer::LineBuffer;
use std::fmt::Write;

/// Render the title line
pub fn write_title<const N: usize>(buf: &mut LineBuffer<N>, name: &str) {
    buf.clear();
    let _ = write!(buf, "=== {} ===", name);
}

/// Render one data row starting at `offset`
pub fn write_row<const N: usize>(buf: &mut LineBuffer<N>, offset: usize, bytes: &[u8]) {
    buf.clear();
    let _ = write!(buf, "{:04X}: ", offset);
    for byte in bytes {
        let _ = write!(buf, "{:02X} ", byte);
    }
}

/// Split `data` into `(offset, row)` pairs of at most `width` bytes
///
/// A width of zero is treated as one.
pub fn rows(data: &[u8], width: u8) -> impl Iterator<Item = (usize, &[u8])> {
    let width = usize::from(width.max(1));
    data.chunks(width)
        .enumerate()
        .map(move |(index, row)| (index * width, row))
}

/// Number of data rows a dump of `len` bytes produces
pub fn row_count(len: usize, width: u8) -> usize {
    len.div_ceil(usize::from(width.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(offset: usize, bytes: &[u8]) -> String {
        let mut buf = LineBuffer::<128>::new();
        write_row(&mut buf, offset, bytes);
        buf.as_str().to_string()
    }

    #[test]
    fn test_title() {
        let mut buf = LineBuffer::<64>::new();
        write_title(&mut buf, "BUF");
        assert_eq!(buf.as_str(), "=== BUF ===");
    }

    #[test]
    fn test_row_format() {
        assert_eq!(row_text(0, &[0x0A, 0x1B, 0x2C]), "0000: 0A 1B 2C ");
        assert_eq!(row_text(0x1F0, &[0xFF]), "01F0: FF ");
    }

    #[test]
    fn test_offset_wider_than_four_digits() {
        assert_eq!(row_text(0x12345, &[0]), "12345: 00 ");
    }

    #[test]
    fn test_rows_split_with_short_tail() {
        let data = [1u8, 2, 3, 4, 5];
        let split: Vec<_> = rows(&data, 2).collect();
        assert_eq!(
            split,
            vec![(0, &data[0..2]), (2, &data[2..4]), (4, &data[4..5])]
        );
    }

    #[test]
    fn test_zero_width_clamped_to_one() {
        assert_eq!(rows(&[9, 8], 0).count(), 2);
        assert_eq!(row_count(2, 0), 2);
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(0, 16), 0);
        assert_eq!(row_count(16, 16), 1);
        assert_eq!(row_count(17, 16), 2);
        assert_eq!(row_count(3, 4), 1);
    }

    #[test]
    fn test_row_truncated_by_small_buffer() {
        let mut buf = LineBuffer::<10>::new();
        write_row(&mut buf, 0, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(buf.as_str(), "0000: AA ");
        assert!(buf.is_truncated());
    }
}
