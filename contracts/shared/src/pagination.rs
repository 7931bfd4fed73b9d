//! Offset/limit windows over append-only sequences
//!
//! Results are read straight from an indexed sequence, so a page only ever
//! touches the slots inside its window.

use core::ops::Range;

/// Compute the index window `[offset, offset + limit)` clipped to `len`.
///
/// An offset at or past the end yields an empty range.
pub fn page_range(len: u32, offset: u32, limit: u32) -> Range<u32> {
    if offset >= len {
        return len..len;
    }
    let remaining = len - offset;
    offset..offset + limit.min(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_inside_sequence() {
        assert_eq!(page_range(10, 2, 3), 2..5);
        assert_eq!(page_range(2, 1, 1), 1..2);
    }

    #[test]
    fn test_window_clipped_at_end() {
        assert_eq!(page_range(5, 3, 10), 3..5);
        assert_eq!(page_range(5, 0, u32::MAX), 0..5);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        assert!(page_range(2, 2, 1).is_empty());
        assert!(page_range(2, u32::MAX, u32::MAX).is_empty());
        assert!(page_range(0, 0, 1).is_empty());
    }
}
