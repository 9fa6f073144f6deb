//! Index-finding primitives over bytes and code points.
//!
//! Byte scanners are only ever given sets of single-byte ASCII values, so a
//! match can never land inside a multi-byte UTF-8 sequence and every index
//! they return is a valid `str` boundary.

use crate::ascii_set::AsciiSet;
use crate::rune_table::RuneTable;

/// Returns the index of the first byte of `s` that is in `set`.
///
/// # Examples
///
/// ```
/// use host_lexer::{AsciiSet, index_any_ascii};
///
/// let set = AsciiSet::new(b"/?#");
/// assert_eq!(index_any_ascii("example.com/path?q", &set), Some(11));
/// assert_eq!(index_any_ascii("example.com", &set), None);
/// ```
#[must_use]
pub fn index_any_ascii(s: &str, set: &AsciiSet) -> Option<usize> {
    s.bytes().position(|b| set.contains(b))
}

/// Returns the byte index of the first code point of `s` that is in `table`.
#[must_use]
pub fn index_any(s: &str, table: &RuneTable) -> Option<usize> {
    s.char_indices()
        .find(|&(_, r)| table.contains(r))
        .map(|(i, _)| i)
}

/// Returns the byte index of the last code point of `s` that is in `table`.
///
/// Decodes backwards one code point at a time.
#[must_use]
pub fn last_index_any(s: &str, table: &RuneTable) -> Option<usize> {
    s.char_indices()
        .rev()
        .find(|&(_, r)| table.contains(r))
        .map(|(i, _)| i)
}

/// Returns the index of the last `b` before the first byte in `boundary`.
///
/// When no boundary byte exists the whole string is searched.
///
/// # Examples
///
/// ```
/// use host_lexer::{AsciiSet, index_last_byte_before};
///
/// let boundary = AsciiSet::new(b"/?#");
/// assert_eq!(index_last_byte_before("host:80/a:b", b':', &boundary), Some(4));
/// assert_eq!(index_last_byte_before("a:b:c", b':', &boundary), Some(3));
/// assert_eq!(index_last_byte_before("/x:1", b':', &boundary), None);
/// ```
#[must_use]
pub fn index_last_byte_before(s: &str, b: u8, boundary: &AsciiSet) -> Option<usize> {
    let bytes = s.as_bytes();
    let end = index_any_ascii(s, boundary).unwrap_or(bytes.len());
    bytes[..end].iter().rposition(|&c| c == b)
}

/// Reverses `items` in place.
pub fn reverse<T>(items: &mut [T]) {
    let Some(mut j) = items.len().checked_sub(1) else {
        return;
    };
    let mut i = 0;
    while i < j {
        items.swap(i, j);
        i += 1;
        j -= 1;
    }
}
