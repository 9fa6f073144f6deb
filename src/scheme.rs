//! Scheme and authority-introducer prefix scanning.
//!
//! ```abnf
//! prefix = [ ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":" ] 2*( "/" / "\" )
//! ```
//!
//! A slash met while still reading scheme characters also starts the slash
//! run, so `abc//host` is measured as a prefix even without the colon.

use crate::ascii_set::AsciiSet;

/// Bytes allowed after the first letter of a scheme.
pub(crate) const SCHEME_CHAR_BYTES: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+-.";

pub(crate) const SCHEME_CHARS: AsciiSet = AsciiSet::new(SCHEME_CHAR_BYTES);

const SLASHES: AsciiSet = AsciiSet::new(b"/\\");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    SchemeChars,
    AfterColon,
    Slashes(usize),
}

/// Measures a leading `scheme://` or `//` prefix.
///
/// Returns the index of the first byte after the slashes, or `None` if the
/// string does not open with a recognizable prefix. Backslashes count as
/// slashes and at least two are required.
///
/// # Examples
///
/// ```
/// use host_lexer::scan_scheme;
///
/// assert_eq!(scan_scheme("http://x"), Some(7));
/// assert_eq!(scan_scheme("//x"), Some(2));
/// assert_eq!(scan_scheme("a+b-1.c://"), Some(10));
/// assert_eq!(scan_scheme("not a url"), None);
/// assert_eq!(scan_scheme("mailto:user@example.com"), None);
/// ```
#[must_use]
pub fn scan_scheme(s: &str) -> Option<usize> {
    let mut state = State::Start;
    for (i, &b) in s.as_bytes().iter().enumerate() {
        state = match state {
            State::Start if b.is_ascii_alphabetic() => State::SchemeChars,
            State::Start if SLASHES.contains(b) => State::Slashes(1),
            State::SchemeChars if b == b':' => State::AfterColon,
            State::SchemeChars | State::AfterColon if SLASHES.contains(b) => State::Slashes(1),
            State::SchemeChars if SCHEME_CHARS.contains(b) => State::SchemeChars,
            State::Slashes(n) if SLASHES.contains(b) => State::Slashes(n + 1),
            State::Slashes(n) => return (n >= 2).then_some(i),
            _ => return None,
        };
    }
    match state {
        State::Slashes(n) if n >= 2 => Some(s.len()),
        _ => None,
    }
}
