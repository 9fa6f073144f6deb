//! Lexical engine for URLs and hosts.
//!
//! This crate splits a raw URL into scheme, userinfo, host, port and path,
//! decides whether the host is an IPv4 or IPv6 literal, and prepares a
//! normalized host (lower-cased, optionally punycode) for public-suffix
//! matching.
//!
//! # Overview
//!
//! ```text
//! [scheme:]//[userinfo@]host[:port][/path][?query][#fragment]
//! ```
//!
//! Scanning is byte- and code-point-precise and allocation-conscious:
//! delimiter checks go through 256-bit [`AsciiSet`]s, and multi-byte label
//! separators and forbidden host characters through sorted [`RuneTable`]s.
//! Components borrow from the input; only a host that had to be folded or
//! converted is owned.
//!
//! # Quick Start
//!
//! ```rust
//! use host_lexer::{DecomposedUrl, HostKind, looks_like_ip_address};
//!
//! let url = DecomposedUrl::parse("user:pass@abc.example.com:5000/a/path");
//! assert_eq!(url.userinfo(), Some("user:pass"));
//! assert_eq!(url.host(), "abc.example.com");
//! assert_eq!(url.port(), Some("5000"));
//! assert_eq!(url.path(), Some("/a/path"));
//!
//! assert!(looks_like_ip_address("2001:db8::68"));
//! assert!(!looks_like_ip_address("example.com"));
//! ```
//!
//! # Failure Model
//!
//! Nothing here panics or returns a hard error on malformed input. IP and
//! scheme scanners answer with `Option`/`bool`; the decomposer leaves bad
//! components empty and records a [`HostError`] or [`PortError`] next to
//! them.
//!
//! # Public-Suffix Matching
//!
//! Suffix lists are not part of this crate. Implement [`SuffixResolver`]
//! (any `Fn(&[&str]) -> usize` already does) and call [`extract`] to split
//! the host into subdomain, domain and suffix.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod ascii_set;
mod constants;
mod error;
mod extract;
mod host;
mod ip;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod rune_table;
mod scan;
mod scheme;
mod url;

pub use ascii_set::{AsciiSet, END_OF_HOST, END_OF_HOST_WITH_PORT, INVALID_USERINFO};
pub use constants::{
    END_OF_HOST_DELIMITERS, END_OF_HOST_WITH_PORT_DELIMITERS, INVALID_HOST_CHARS,
    INVALID_USERINFO_CHARS, IPV4_LEN, IPV6_LEN, LABEL_SEPARATOR_CHARS, MAX_PORT, MAX_PORT_DIGITS,
    WHITESPACE_CHARS,
};
pub use error::{HostError, PortError, PunycodeError};
pub use extract::{Extraction, SuffixResolver, extract};
pub use host::{
    HostKind, format_as_punycode, has_invalid_chars_or_consecutive_label_separators,
    standardize_label_separators, strip_trailing_label_separator, to_lowercase, trim_whitespace,
};
pub use ip::{
    IpAddress, looks_like_ip_address, looks_like_ipv4_address, parse_ip, parse_ipv4, parse_ipv6,
};
pub use rune_table::{INVALID_HOST, LABEL_SEPARATORS, RuneTable, WHITESPACE, is_label_separator};
pub use scan::{index_any, index_any_ascii, index_last_byte_before, last_index_any, reverse};
pub use scheme::scan_scheme;
pub use url::{DecomposeOptions, DecomposedUrl, decompose};
