//! Half-open char ranges over a specific text buffer version.
//!
//! All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
//! A range is only meaningful for the buffer it was anchored to; moving it
//! to an edited buffer goes through [`crate::edit::EditPlan::remap`].

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::RangeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    start: usize,
    len: usize,
}

impl TextRange {
    /// Build a range without checking it against any buffer.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Build a range from untrusted signed offsets, checking it against the
    /// length (in chars) of the buffer it claims to be anchored to.
    pub fn anchored(start: i64, len: i64, buffer_len: usize) -> Result<Self, RangeError> {
        let invalid = || RangeError::InvalidRange {
            start,
            len,
            buffer_len,
        };

        let start_u = usize::try_from(start).map_err(|_| invalid())?;
        let len_u = usize::try_from(len).map_err(|_| invalid())?;
        let end = start_u.checked_add(len_u).ok_or_else(invalid)?;
        if end > buffer_len {
            return Err(invalid());
        }

        Ok(Self::new(start_u, len_u))
    }

    /// Check an existing range against `text`.
    pub fn within(start: usize, len: usize, text: &str) -> Result<Self, RangeError> {
        Self::new(start, len).check(char_len(text))
    }

    /// Re-validate this range against a buffer of `buffer_len` chars.
    pub fn check(self, buffer_len: usize) -> Result<Self, RangeError> {
        match self.start.checked_add(self.len) {
            Some(end) if end <= buffer_len => Ok(self),
            _ => Err(RangeError::InvalidRange {
                start: self.start as i64,
                len: self.len as i64,
                buffer_len,
            }),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_range(self) -> Range<usize> {
        self.start..self.end()
    }

    /// Check if a char offset falls inside the range (end exclusive).
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// True when the two ranges share at least one char, or when they are
    /// the same zero-length position.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        if self == other {
            return true;
        }
        self.start < other.end() && other.start < self.end()
    }

    /// Borrow the chars covered by this range. `None` if it doesn't fit.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = byte_offset(text, self.start)?;
        let end = byte_offset(text, self.end())?;
        text.get(start..end)
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.to_range()
    }
}

/// Length of `text` in chars.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset into a byte offset. The offset one past the last
/// char maps to `text.len()`.
pub fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_accepts_valid_ranges() {
        let range = TextRange::anchored(2, 3, 5).unwrap();
        assert_eq!(range.start(), 2);
        assert_eq!(range.len(), 3);
        assert_eq!(range.end(), 5);

        // Zero-length range at the very end of the buffer is fine.
        assert!(TextRange::anchored(5, 0, 5).is_ok());
    }

    #[test]
    fn test_anchored_rejects_negative_and_overflowing() {
        assert_eq!(
            TextRange::anchored(-1, 2, 10),
            Err(RangeError::InvalidRange {
                start: -1,
                len: 2,
                buffer_len: 10
            })
        );
        assert!(TextRange::anchored(0, -2, 10).is_err());
        assert!(TextRange::anchored(8, 3, 10).is_err());
        assert!(TextRange::anchored(i64::MAX, 1, 10).is_err());
    }

    #[test]
    fn test_within_counts_chars_not_bytes() {
        // "héllo" is 5 chars, 6 bytes
        assert!(TextRange::within(0, 5, "héllo").is_ok());
        assert!(TextRange::within(0, 6, "héllo").is_err());
    }

    #[test]
    fn test_contains_is_end_exclusive() {
        let range = TextRange::new(5, 5);
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(9));
        assert!(!range.contains(10));
    }

    #[test]
    fn test_overlaps() {
        let a = TextRange::new(0, 5);
        assert!(a.overlaps(&TextRange::new(4, 2)));
        assert!(!a.overlaps(&TextRange::new(5, 2)));
        assert!(!TextRange::new(3, 0).overlaps(&TextRange::new(3, 2)));
        assert!(TextRange::new(3, 0).overlaps(&TextRange::new(3, 0)));
    }

    #[test]
    fn test_slice() {
        let text = "hi 🌍 there";
        assert_eq!(TextRange::new(3, 1).slice(text), Some("🌍"));
        assert_eq!(TextRange::new(5, 5).slice(text), Some("there"));
        assert_eq!(TextRange::new(10, 0).slice(text), Some(""));
        assert_eq!(TextRange::new(8, 5).slice(text), None);
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("aé🌍", 0), Some(0));
        assert_eq!(byte_offset("aé🌍", 2), Some(3));
        assert_eq!(byte_offset("aé🌍", 3), Some(7));
        assert_eq!(byte_offset("aé🌍", 4), None);
    }
}
