//! Character-position helpers for string values.

use lamina_common::Result;
use lamina_common::error::Error;

/// Extracts the sub-range `[start, end)` of `s` by character position.
///
/// Positions count characters, not bytes, so the result is always a valid
/// string slice. Requires `start <= end` and both positions within
/// `0..=char count`; violations are reported as errors, never clamped.
pub fn sub_sequence(s: &str, start: usize, end: usize) -> Result<&str> {
    lamina_common::verify_arg!(range, start <= end);
    let begin = char_offset(s, start)
        .ok_or_else(|| Error::out_of_bounds(start, s.chars().count()))?;
    let finish =
        char_offset(s, end).ok_or_else(|| Error::out_of_bounds(end, s.chars().count()))?;
    Ok(&s[begin..finish])
}

/// Byte offset of the character at `pos`, or the byte length when `pos`
/// equals the character count.
fn char_offset(s: &str, pos: usize) -> Option<usize> {
    if pos == 0 {
        return Some(0);
    }
    match s.char_indices().nth(pos) {
        Some((offset, _)) => Some(offset),
        None => (s.chars().count() == pos).then_some(s.len()),
    }
}

#[cfg(test)]
mod tests {
    use lamina_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_interior_range() {
        assert_eq!(sub_sequence("abcdef", 1, 4).unwrap(), "bcd");
    }

    #[test]
    fn test_full_range() {
        assert_eq!(sub_sequence("abc", 0, 3).unwrap(), "abc");
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(sub_sequence("abc", 2, 2).unwrap(), "");
        assert_eq!(sub_sequence("", 0, 0).unwrap(), "");
    }

    #[test]
    fn test_positions_count_characters() {
        assert_eq!(sub_sequence("héllo", 1, 3).unwrap(), "él");
    }

    #[test]
    fn test_end_past_count_rejected() {
        let err = sub_sequence("abc", 0, 4).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::OutOfBounds { .. }));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = sub_sequence("abc", 2, 1).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }
}
