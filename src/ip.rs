//! IPv4 and IPv6 literal parsing into a single 16-byte representation.
//!
//! # Grammar Reference
//!
//! ```abnf
//! IPv4address = dec-octet 3( sep dec-octet )
//! sep         = "." / %x3002 / %xFF0E / %xFF61
//! dec-octet   = "0" / %x31-39 *2DIGIT        ; value 0-255
//! IPv6address = RFC 4291 section 2.2 text form, optional trailing IPv4address
//! ```
//!
//! Both parsers return `None` for anything that is not a literal. Absence
//! means "this host is a name", never an error and never the zero address.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::constants::{IPV4_LEN, IPV6_LEN, NUMBER_CLAMP};
use crate::rune_table::is_label_separator;

/// Prefix of an IPv4 address embedded in IPv6 (`::ffff:a.b.c.d`).
const V4_IN_V6_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// A parsed IP literal, always 16 bytes.
///
/// IPv4 addresses are stored in IPv4-mapped IPv6 form so both families
/// share one representation and one comparison.
///
/// # Examples
///
/// ```
/// use host_lexer::{parse_ipv4, parse_ipv6};
///
/// let v4 = parse_ipv4("192.0.2.1").unwrap();
/// let mapped = parse_ipv6("::ffff:192.0.2.1").unwrap();
/// assert_eq!(v4, mapped);
/// assert_eq!(v4.to_string(), "192.0.2.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpAddress([u8; IPV6_LEN]);

impl IpAddress {
    /// The all-zero address (`::`).
    pub const UNSPECIFIED: Self = Self([0; IPV6_LEN]);

    /// Builds the mapped form of the IPv4 address `a.b.c.d`.
    #[must_use]
    pub const fn from_ipv4(a: u8, b: u8, c: u8, d: u8) -> Self {
        let mut bytes = [0u8; IPV6_LEN];
        let mut i = 0;
        while i < V4_IN_V6_PREFIX.len() {
            bytes[i] = V4_IN_V6_PREFIX[i];
            i += 1;
        }
        bytes[12] = a;
        bytes[13] = b;
        bytes[14] = c;
        bytes[15] = d;
        Self(bytes)
    }

    /// Wraps 16 raw bytes.
    #[must_use]
    pub const fn from_octets(octets: [u8; IPV6_LEN]) -> Self {
        Self(octets)
    }

    /// Returns the 16 raw bytes.
    #[must_use]
    pub const fn octets(&self) -> [u8; IPV6_LEN] {
        self.0
    }

    /// Returns true if the address is in `::ffff:0:0/96`.
    #[must_use]
    pub fn is_ipv4_mapped(&self) -> bool {
        self.0[..12] == V4_IN_V6_PREFIX
    }

    /// Returns the IPv4 address if this is a mapped address.
    #[must_use]
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        self.is_ipv4_mapped()
            .then(|| Ipv4Addr::new(self.0[12], self.0[13], self.0[14], self.0[15]))
    }

    /// Returns the address as IPv6, mapped form included.
    #[must_use]
    pub const fn to_ipv6(&self) -> Ipv6Addr {
        Ipv6Addr::from_bits(u128::from_be_bytes(self.0))
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(ip: Ipv4Addr) -> Self {
        let [a, b, c, d] = ip.octets();
        Self::from_ipv4(a, b, c, d)
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(ip: Ipv6Addr) -> Self {
        Self(ip.octets())
    }
}

impl From<IpAddr> for IpAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(ip: IpAddress) -> Self {
        match ip.to_ipv4() {
            Some(v4) => Self::V4(v4),
            None => Self::V6(ip.to_ipv6()),
        }
    }
}

impl From<IpAddress> for Ipv6Addr {
    fn from(ip: IpAddress) -> Self {
        ip.to_ipv6()
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_ipv4() {
            Some(v4) => write!(f, "{v4}"),
            None => write!(f, "{}", self.to_ipv6()),
        }
    }
}

impl PartialOrd for IpAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IpAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IpAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IpAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_ip(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid IP literal '{s}'")))
    }
}

/// Decimal to integer.
///
/// Returns the value and the number of bytes consumed. Fails on no digits,
/// or as soon as the value reaches the clamp.
fn dtoi(s: &[u8]) -> Option<(u32, usize)> {
    let mut n: u32 = 0;
    let mut i = 0;
    while let Some(&c) = s.get(i) {
        if !c.is_ascii_digit() {
            break;
        }
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(u32::from(c - b'0')))
            .filter(|&n| n < NUMBER_CLAMP)?;
        i += 1;
    }
    (i > 0).then_some((n, i))
}

/// Hexadecimal to integer, same contract as [`dtoi`].
fn xtoi(s: &[u8]) -> Option<(u32, usize)> {
    let mut n: u32 = 0;
    let mut i = 0;
    while let Some(digit) = s.get(i).and_then(|&c| char::from(c).to_digit(16)) {
        n = n
            .checked_mul(16)
            .and_then(|n| n.checked_add(digit))
            .filter(|&n| n < NUMBER_CLAMP)?;
        i += 1;
    }
    (i > 0).then_some((n, i))
}

/// Splits a leading label separator off `s`.
fn strip_label_separator(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars
        .next()
        .filter(|&r| is_label_separator(r))
        .map(|_| chars.as_str())
}

/// Parses a dotted-quad IPv4 literal.
///
/// Octets are decimal 0-255 without leading zeros, separated by `.` or one
/// of its IDNA equivalents. Returns the IPv4-mapped 16-byte form.
///
/// # Examples
///
/// ```
/// use host_lexer::parse_ipv4;
///
/// let ip = parse_ipv4("192.0.2.1").unwrap();
/// assert_eq!(ip.octets()[12..], [192, 0, 2, 1]);
///
/// assert!(parse_ipv4("192\u{3002}0\u{ff0e}2\u{ff61}1").is_some());
/// assert!(parse_ipv4("01.0.2.1").is_none());
/// assert!(parse_ipv4("256.0.0.1").is_none());
/// assert!(parse_ipv4("1.2.3").is_none());
/// ```
#[must_use]
pub fn parse_ipv4(s: &str) -> Option<IpAddress> {
    let mut rest = s;
    let mut octets = [0u8; IPV4_LEN];
    for (i, octet) in octets.iter_mut().enumerate() {
        if rest.is_empty() {
            return None;
        }
        if i > 0 {
            rest = strip_label_separator(rest)?;
        }
        let bytes = rest.as_bytes();
        let (n, consumed) = dtoi(bytes)?;
        // Leading zeros are rejected; a lone "0" is fine.
        if consumed > 1 && bytes[0] == b'0' {
            return None;
        }
        *octet = u8::try_from(n).ok()?;
        rest = &rest[consumed..];
    }
    if !rest.is_empty() {
        return None;
    }
    let [a, b, c, d] = octets;
    Some(IpAddress::from_ipv4(a, b, c, d))
}

/// Parses an IPv6 literal (RFC 4291, RFC 5952), without brackets.
///
/// Groups are one to four hex digits. Accepts one `::` ellipsis and a
/// trailing embedded IPv4 literal.
///
/// # Examples
///
/// ```
/// use host_lexer::parse_ipv6;
///
/// let short = parse_ipv6("2001:db8::68").unwrap();
/// let long = parse_ipv6("2001:0db8:0000:0000:0000:0000:0000:0068").unwrap();
/// assert_eq!(short, long);
///
/// assert_eq!(parse_ipv6("::").unwrap().octets(), [0; 16]);
/// assert!(parse_ipv6("1::2::3").is_none());
/// ```
#[must_use]
pub fn parse_ipv6(s: &str) -> Option<IpAddress> {
    let mut ip = [0u8; IPV6_LEN];
    let mut ellipsis: Option<usize> = None;
    let mut rest = s;

    if let Some(after) = rest.strip_prefix("::") {
        ellipsis = Some(0);
        rest = after;
        if rest.is_empty() {
            return Some(IpAddress(ip));
        }
    }

    let mut i = 0;
    while i < IPV6_LEN {
        let (n, consumed) = xtoi(rest.as_bytes())?;
        if consumed > 4 || n > 0xFFFF {
            return None;
        }

        // A group followed by a label separator starts a trailing IPv4.
        if strip_label_separator(&rest[consumed..]).is_some() {
            if ellipsis.is_none() && i != IPV6_LEN - IPV4_LEN {
                return None;
            }
            if i + IPV4_LEN > IPV6_LEN {
                return None;
            }
            let v4 = parse_ipv4(rest)?.octets();
            ip[i..i + IPV4_LEN].copy_from_slice(&v4[IPV6_LEN - IPV4_LEN..]);
            rest = "";
            i += IPV4_LEN;
            break;
        }

        let [hi, lo] = u16::try_from(n).ok()?.to_be_bytes();
        ip[i] = hi;
        ip[i + 1] = lo;
        i += 2;

        rest = &rest[consumed..];
        if rest.is_empty() {
            break;
        }

        // Otherwise a colon and at least one more byte must follow.
        rest = rest.strip_prefix(':').filter(|r| !r.is_empty())?;

        if let Some(after) = rest.strip_prefix(':') {
            if ellipsis.is_some() {
                return None;
            }
            ellipsis = Some(i);
            rest = after;
            if rest.is_empty() {
                break;
            }
        }
    }

    if !rest.is_empty() {
        return None;
    }

    match ellipsis {
        Some(at) if i < IPV6_LEN => {
            let gap = IPV6_LEN - i;
            ip.copy_within(at..i, at + gap);
            ip[at..at + gap].fill(0);
        }
        // An ellipsis must stand for at least one zero group.
        Some(_) => return None,
        None if i < IPV6_LEN => return None,
        None => {}
    }
    Some(IpAddress(ip))
}

/// Parses `s` as either IP family.
///
/// The family is chosen by whichever comes first: a label separator
/// (IPv4) or a colon (IPv6).
#[must_use]
pub fn parse_ip(s: &str) -> Option<IpAddress> {
    s.chars().find_map(|r| match r {
        ':' => Some(parse_ipv6(s)),
        r if is_label_separator(r) => Some(parse_ipv4(s)),
        _ => None,
    })?
}

/// Returns true if `s` is an IPv4 or IPv6 literal.
///
/// # Examples
///
/// ```
/// use host_lexer::looks_like_ip_address;
///
/// assert!(looks_like_ip_address("10.0.0.1"));
/// assert!(looks_like_ip_address("::1"));
/// assert!(!looks_like_ip_address("example.com"));
/// ```
#[must_use]
pub fn looks_like_ip_address(s: &str) -> bool {
    parse_ip(s).is_some()
}

/// Returns true if `s` is a dotted-quad IPv4 literal.
#[must_use]
pub fn looks_like_ipv4_address(s: &str) -> bool {
    parse_ipv4(s).is_some()
}
