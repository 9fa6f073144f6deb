//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use host_lexer::prelude::*;
//!
//! let url = decompose("http://[::1]:8080/", &DecomposeOptions::default());
//! assert!(matches!(url.host_kind(), HostKind::Ipv6(_)));
//! ```
//!
//! The low-level scanners and character tables are left out; import them
//! from the crate root when needed.

pub use crate::{
    // Decomposition
    DecomposeOptions, DecomposedUrl, Extraction, HostKind, IpAddress, SuffixResolver, decompose,
    extract,
    // Classification
    looks_like_ip_address, parse_ip, parse_ipv4, parse_ipv6, scan_scheme,
    // Normalization
    format_as_punycode, has_invalid_chars_or_consecutive_label_separators,
    // Errors
    HostError, PortError, PunycodeError,
};
