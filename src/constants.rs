//! Character sets and numeric limits shared by the scanners.

/// Label separators accepted by IDNA (RFC 3490 section 3.1): full stop,
/// ideographic full stop, fullwidth full stop, halfwidth ideographic full stop.
pub const LABEL_SEPARATOR_CHARS: &str = "\u{002e}\u{3002}\u{ff0e}\u{ff61}";

/// Whitespace trimmed from both ends of an input URL.
pub const WHITESPACE_CHARS: &str =
    " \t\n\u{000b}\u{000c}\r\u{feff}\u{200b}\u{200c}\u{200d}\u{00a0}\u{1680}\u{0085}";

/// Characters that may never appear in a hostname.
///
/// ASCII control characters, DEL, URL delimiters and punctuation that DNS
/// labels cannot carry. Whitespace is appended when the table is built.
pub const INVALID_HOST_CHARS: &str = concat!(
    "\u{0000}\u{0001}\u{0002}\u{0003}\u{0004}\u{0005}\u{0006}\u{0007}",
    "\u{0008}\u{0009}\u{000a}\u{000b}\u{000c}\u{000d}\u{000e}\u{000f}",
    "\u{0010}\u{0011}\u{0012}\u{0013}\u{0014}\u{0015}\u{0016}\u{0017}",
    "\u{0018}\u{0019}\u{001a}\u{001b}\u{001c}\u{001d}\u{001e}\u{001f}",
    "\u{007f}",
    " !\"#$%&'()*+,/:;<=>?@[\\]^`{|}~",
);

/// Bytes that end the host and port of an authority.
pub const END_OF_HOST_WITH_PORT_DELIMITERS: &[u8] = b"/\\?#";

/// Bytes that end a host when a port may follow.
pub const END_OF_HOST_DELIMITERS: &[u8] = b"/\\?#:";

/// Bytes that cannot appear in userinfo.
pub const INVALID_USERINFO_CHARS: &[u8] = b"/\\?#[]";

/// IPv4 address length in bytes.
pub const IPV4_LEN: usize = 4;

/// IPv6 address length in bytes; every parsed address uses this length.
pub const IPV6_LEN: usize = 16;

/// Digit accumulators give up once a value reaches this bound.
pub const NUMBER_CLAMP: u32 = 0x00FF_FFFF;

/// Largest valid port number.
pub const MAX_PORT: u32 = 65_535;

/// Longest port, in digits.
pub const MAX_PORT_DIGITS: usize = 5;

/// Reason reported for every IDNA rejection; the detailed error is not exposed.
pub const IDNA_ERROR_REASON: &str = "idna: invalid label";
