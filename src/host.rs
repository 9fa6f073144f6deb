//! Hostname validation and normalization.
//!
//! Hosts are checked against the invalid-character table, folded to lower
//! case and, on request, converted to their ASCII-compatible (punycode)
//! form through UTS 46 processing.

use std::borrow::Cow;
use std::ops::Range;

use idna::uts46::{AsciiDenyList, DnsLength, Hyphens, Uts46};

use crate::constants::IDNA_ERROR_REASON;
use crate::error::PunycodeError;
use crate::ip::IpAddress;
use crate::rune_table::{INVALID_HOST, LABEL_SEPARATORS, WHITESPACE, is_label_separator};
use crate::scan::index_any;

/// What a decomposed host turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "address", rename_all = "snake_case"))]
pub enum HostKind {
    /// A domain name (e.g., "example.com")
    #[default]
    Domain,
    /// An IPv4 literal, stored in mapped form
    Ipv4(IpAddress),
    /// A bracketed IPv6 literal
    Ipv6(IpAddress),
}

impl HostKind {
    /// Returns the parsed address for IP literal hosts.
    #[must_use]
    pub const fn ip(&self) -> Option<IpAddress> {
        match self {
            Self::Domain => None,
            Self::Ipv4(ip) | Self::Ipv6(ip) => Some(*ip),
        }
    }

    /// Returns true for either IP family.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        !matches!(self, Self::Domain)
    }
}

/// Reports whether `host` contains a forbidden code point or two label
/// separators in a row.
///
/// # Examples
///
/// ```
/// use host_lexer::has_invalid_chars_or_consecutive_label_separators as invalid;
///
/// assert!(invalid("a..b"));
/// assert!(invalid("a.\u{3002}b"));
/// assert!(invalid("exa\u{7}mple.com"));
/// assert!(!invalid("abc.example.com"));
/// ```
#[must_use]
pub fn has_invalid_chars_or_consecutive_label_separators(host: &str) -> bool {
    let mut after_separator = false;
    for r in host.chars() {
        if is_label_separator(r) {
            if after_separator {
                return true;
            }
            after_separator = true;
        } else if INVALID_HOST.contains(r) {
            return true;
        } else {
            after_separator = false;
        }
    }
    false
}

/// Converts a host to its ASCII-compatible form.
///
/// Labels are mapped with UTS 46; the bidi rule is enforced. The
/// deviation characters and capital sharp s are folded first so the
/// output matches transitional processing (`faß.de` and `FAẞ.de` both
/// become `fass.de`). An empty result is reported as an error, never
/// returned.
///
/// # Errors
///
/// Returns `PunycodeError` if the host is empty or IDNA processing rejects
/// one of its labels. IDNA rejections carry a fixed short reason.
///
/// # Examples
///
/// ```
/// use host_lexer::format_as_punycode;
///
/// assert_eq!(format_as_punycode("example.com").unwrap(), "example.com");
/// assert_eq!(format_as_punycode("m\u{fc}nchen.de").unwrap(), "xn--mnchen-3ya.de");
/// ```
pub fn format_as_punycode(host: &str) -> Result<String, PunycodeError> {
    if host.is_empty() {
        return Err(PunycodeError {
            input: String::new(),
            reason: "empty host".to_string(),
        });
    }
    let mapped = map_deviations(host);
    let ascii = Uts46::new()
        .to_ascii(
            mapped.as_bytes(),
            AsciiDenyList::EMPTY,
            Hyphens::Allow,
            DnsLength::Ignore,
        )
        .map_err(|_| PunycodeError {
            input: host.to_string(),
            reason: IDNA_ERROR_REASON.to_string(),
        })?;
    if ascii.is_empty() {
        return Err(PunycodeError {
            input: host.to_string(),
            reason: "conversion produced an empty host".to_string(),
        });
    }
    Ok(ascii.into_owned())
}

/// Applies the UTS 46 transitional mappings for the deviation characters.
///
/// U+1E9E is included because UTS 46 maps it to U+00DF.
fn map_deviations(host: &str) -> Cow<'_, str> {
    const DEVIATIONS: [char; 5] = ['\u{00df}', '\u{1e9e}', '\u{03c2}', '\u{200c}', '\u{200d}'];
    if !host.contains(DEVIATIONS) {
        return Cow::Borrowed(host);
    }
    let mut out = String::with_capacity(host.len() + 1);
    for r in host.chars() {
        match r {
            '\u{00df}' | '\u{1e9e}' => out.push_str("ss"),
            '\u{03c2}' => out.push('\u{03c3}'),
            '\u{200c}' | '\u{200d}' => {}
            r => out.push(r),
        }
    }
    Cow::Owned(out)
}

/// Replaces every internationalized label separator with `.`.
#[must_use]
pub fn standardize_label_separators(host: &str) -> Cow<'_, str> {
    if host.is_ascii() {
        return Cow::Borrowed(host);
    }
    if !host.chars().any(|r| r != '.' && is_label_separator(r)) {
        return Cow::Borrowed(host);
    }
    Cow::Owned(
        host.chars()
            .map(|r| if is_label_separator(r) { '.' } else { r })
            .collect(),
    )
}

/// Drops one trailing label separator (the DNS root label).
///
/// # Examples
///
/// ```
/// use host_lexer::strip_trailing_label_separator;
///
/// assert_eq!(strip_trailing_label_separator("example.com."), "example.com");
/// assert_eq!(strip_trailing_label_separator("example.com\u{3002}"), "example.com");
/// assert_eq!(strip_trailing_label_separator("example.com"), "example.com");
/// ```
#[must_use]
pub fn strip_trailing_label_separator(host: &str) -> &str {
    match host.chars().next_back() {
        Some(r) if is_label_separator(r) => &host[..host.len() - r.len_utf8()],
        _ => host,
    }
}

/// Lower-cases `host`, borrowing when it already is.
#[must_use]
pub fn to_lowercase(host: &str) -> Cow<'_, str> {
    if host.is_ascii() {
        if host.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(host.to_ascii_lowercase())
        } else {
            Cow::Borrowed(host)
        }
    } else if host.chars().any(char::is_uppercase) {
        Cow::Owned(host.to_lowercase())
    } else {
        Cow::Borrowed(host)
    }
}

/// Trims runes from the whitespace table off both ends of `s`.
#[must_use]
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|r: char| WHITESPACE.contains(r))
}

/// Byte ranges of the labels of `host`, honouring every label separator.
pub(crate) fn label_ranges(host: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    while let Some(i) = index_any(&host[start..], &LABEL_SEPARATORS) {
        let at = start + i;
        ranges.push(start..at);
        start = at + host[at..].chars().next().map_or(1, char::len_utf8);
    }
    ranges.push(start..host.len());
    ranges
}
