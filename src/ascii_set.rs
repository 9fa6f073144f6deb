//! Constant-time byte membership over a 256-bit bitmap.

use crate::constants::{
    END_OF_HOST_DELIMITERS, END_OF_HOST_WITH_PORT_DELIMITERS, INVALID_USERINFO_CHARS,
};

/// A set of bytes stored as eight 32-bit words.
///
/// Bit `b % 32` of word `b / 32` is set iff byte `b` is a member. Every
/// index computed from a `u8` falls inside the array, so lookups never
/// bounds-check.
///
/// Sets are meant for single-byte ASCII delimiters; they carry no meaning
/// for the individual bytes of multi-byte UTF-8 sequences.
///
/// # Examples
///
/// ```
/// use host_lexer::AsciiSet;
///
/// const VOWELS: AsciiSet = AsciiSet::new(b"aeiou");
/// assert!(VOWELS.contains(b'e'));
/// assert!(!VOWELS.contains(b'z'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AsciiSet([u32; 8]);

impl AsciiSet {
    /// Builds a set containing every byte of `chars`.
    #[must_use]
    pub const fn new(chars: &[u8]) -> Self {
        let mut words = [0u32; 8];
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            words[(c / 32) as usize] |= 1 << (c % 32);
            i += 1;
        }
        Self(words)
    }

    /// Reports whether `c` is in the set.
    #[must_use]
    pub const fn contains(&self, c: u8) -> bool {
        self.0[(c / 32) as usize] & (1 << (c % 32)) != 0
    }

    /// Returns true if no byte is a member.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// `/ \ ? #`: the end of `host[:port]`.
pub const END_OF_HOST_WITH_PORT: AsciiSet = AsciiSet::new(END_OF_HOST_WITH_PORT_DELIMITERS);

/// `/ \ ? # :`: the end of a bare host.
pub const END_OF_HOST: AsciiSet = AsciiSet::new(END_OF_HOST_DELIMITERS);

/// `/ \ ? # [ ]`: bytes that cannot precede the userinfo `@`.
pub const INVALID_USERINFO: AsciiSet = AsciiSet::new(INVALID_USERINFO_CHARS);
