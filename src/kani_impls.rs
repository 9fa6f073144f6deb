//! Kani Arbitrary implementations and proof harnesses for the scanners.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{AsciiSet, IpAddress, parse_ipv4, parse_ipv6, scan_scheme};

/// Bytes the IP and scheme scanners branch on.
const LITERAL_CHARS: &[u8] = b"0129afAF:./\\+x";

/// Generate a short string over `LITERAL_CHARS`.
fn arbitrary_literal<const N: usize>() -> String {
    let len: usize = kani::any();
    let len = len % (N + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            LITERAL_CHARS[idx % LITERAL_CHARS.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for IpAddress {
    fn any() -> Self {
        Self::from_octets(kani::any())
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: IPv4 parsing never panics on short inputs
#[kani::proof]
#[kani::unwind(10)]
fn proof_parse_ipv4_total() {
    let s = arbitrary_literal::<8>();
    if let Some(ip) = parse_ipv4(&s) {
        assert!(ip.is_ipv4_mapped());
    }
}

/// Proof: IPv6 parsing never panics on short inputs
#[kani::proof]
#[kani::unwind(10)]
fn proof_parse_ipv6_total() {
    let s = arbitrary_literal::<8>();
    let _ = parse_ipv6(&s);
}

/// Proof: dotted quads of any four octets parse back to the same address
#[kani::proof]
#[kani::unwind(20)]
fn proof_ipv4_display_roundtrip() {
    let octets: [u8; 4] = kani::any();
    let ip = IpAddress::from_ipv4(octets[0], octets[1], octets[2], octets[3]);
    assert_eq!(parse_ipv4(&ip.to_string()), Some(ip));
}

/// Proof: scheme end index always lies inside the input
#[kani::proof]
#[kani::unwind(10)]
fn proof_scan_scheme_in_bounds() {
    let s = arbitrary_literal::<8>();
    if let Some(end) = scan_scheme(&s) {
        assert!(end >= 2 && end <= s.len());
    }
}

/// Proof: a one-byte set contains exactly that byte
#[kani::proof]
fn proof_ascii_set_singleton() {
    let member: u8 = kani::any();
    let probe: u8 = kani::any();
    let set = AsciiSet::new(&[member]);
    assert_eq!(set.contains(probe), probe == member);
}

/// Proof: ordering of addresses is total and agrees with equality
#[kani::proof]
fn proof_ip_ordering_consistent() {
    let a: IpAddress = kani::any();
    let b: IpAddress = kani::any();
    assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
}
