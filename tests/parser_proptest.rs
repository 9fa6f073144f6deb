//! Property-based tests for the scanners and the decomposer.
//!
//! Strategies generate well-formed literals and URLs, and the parsers are
//! checked against `std::net` and against the components they were built
//! from.

use std::net::{Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;

use host_lexer::{
    AsciiSet, DecomposedUrl, HostKind, IpAddress, RuneTable, index_any_ascii,
    index_last_byte_before, looks_like_ip_address, parse_ip, parse_ipv4, parse_ipv6, scan_scheme,
};

/// Strategies for generating well-formed inputs.
mod strategies {
    use super::*;

    /// Valid characters for the body of a DNS label
    const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

    /// Valid characters after the first letter of a scheme
    const SCHEME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789+-.";

    /// Userinfo characters (no delimiters, no `@`)
    const USERINFO_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789:;=!$-_.~";

    /// Path characters after the leading slash (query and fragment included)
    const PATH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789/?#=&@:.-_";

    fn from_alphabet(
        alphabet: &'static [u8],
        len: std::ops::RangeInclusive<usize>,
    ) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(alphabet.to_vec()), len)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Generate a DNS label that starts with a letter (never numeric)
    pub fn dns_label() -> impl Strategy<Value = String> {
        (prop::char::range('a', 'z'), from_alphabet(LABEL_CHARS, 0..=12))
            .prop_map(|(first, rest)| format!("{first}{rest}"))
    }

    /// Generate a domain name of 1-4 labels
    pub fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(dns_label(), 1..=4).prop_map(|labels| labels.join("."))
    }

    /// Generate a scheme prefix such as `svn+ssh://`
    pub fn scheme() -> impl Strategy<Value = String> {
        (prop::char::range('a', 'z'), from_alphabet(SCHEME_CHARS, 0..=8))
            .prop_map(|(first, rest)| format!("{first}{rest}://"))
    }

    /// Generate userinfo text
    pub fn userinfo() -> impl Strategy<Value = String> {
        from_alphabet(USERINFO_CHARS, 1..=16)
    }

    /// Generate a path that starts with a single slash
    pub fn path() -> impl Strategy<Value = String> {
        (prop::char::range('a', 'z'), from_alphabet(PATH_CHARS, 0..=24))
            .prop_map(|(first, rest)| format!("/{first}{rest}"))
    }

    /// Generate any IPv6 address
    pub fn ipv6() -> impl Strategy<Value = Ipv6Addr> {
        any::<u128>().prop_map(Ipv6Addr::from_bits)
    }

    /// Generate an IPv6 address with runs of zero groups
    pub fn sparse_ipv6() -> impl Strategy<Value = Ipv6Addr> {
        prop::collection::vec(prop_oneof![3 => Just(0u16), 1 => any::<u16>()], 8).prop_map(|g| {
            Ipv6Addr::new(g[0], g[1], g[2], g[3], g[4], g[5], g[6], g[7])
        })
    }
}

mod ip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn dotted_quads_parse(
            a in any::<u8>(),
            b in any::<u8>(),
            c in any::<u8>(),
            d in any::<u8>(),
        ) {
            let ip = parse_ipv4(&format!("{a}.{b}.{c}.{d}"));
            prop_assert_eq!(ip, Some(IpAddress::from_ipv4(a, b, c, d)));
            prop_assert_eq!(ip.and_then(|ip| ip.to_ipv4()), Some(Ipv4Addr::new(a, b, c, d)));
        }

        #[test]
        fn unicode_separated_quads_parse(
            a in any::<u8>(),
            b in any::<u8>(),
            c in any::<u8>(),
            d in any::<u8>(),
        ) {
            let s = format!("{a}\u{3002}{b}\u{ff0e}{c}\u{ff61}{d}");
            prop_assert_eq!(parse_ipv4(&s), Some(IpAddress::from_ipv4(a, b, c, d)));
        }

        #[test]
        fn leading_zero_octets_rejected(
            a in 0u8..=99,
            b in any::<u8>(),
            c in any::<u8>(),
            d in any::<u8>(),
        ) {
            let s = format!("0{a}.{b}.{c}.{d}");
            prop_assert!(parse_ipv4(&s).is_none(), "accepted {}", s);
        }

        #[test]
        fn out_of_range_octets_rejected(
            a in 256u32..100_000,
            b in any::<u8>(),
            c in any::<u8>(),
            d in any::<u8>(),
        ) {
            let s = format!("{b}.{c}.{a}.{d}");
            prop_assert!(parse_ipv4(&s).is_none(), "accepted {}", s);
        }

        #[test]
        fn wrong_octet_count_rejected(octets in prop::collection::vec(any::<u8>(), 1..=8)) {
            prop_assume!(octets.len() != 4);
            let s = octets.iter().map(u8::to_string).collect::<Vec<_>>().join(".");
            prop_assert!(parse_ipv4(&s).is_none(), "accepted {}", s);
        }

        #[test]
        fn std_ipv6_text_parses(ip in ipv6()) {
            let parsed = parse_ipv6(&ip.to_string());
            prop_assert_eq!(parsed.map(|p| p.to_ipv6()), Some(ip));
        }

        #[test]
        fn compressed_ipv6_parses(ip in sparse_ipv6()) {
            let text = ip.to_string();
            prop_assert_eq!(parse_ipv6(&text).map(|p| p.to_ipv6()), Some(ip));
            prop_assert!(looks_like_ip_address(&text));
        }

        #[test]
        fn full_form_equals_compressed(ip in sparse_ipv6()) {
            let full = ip
                .segments()
                .iter()
                .map(|g| format!("{g:04x}"))
                .collect::<Vec<_>>()
                .join(":");
            prop_assert_eq!(parse_ipv6(&full), parse_ipv6(&ip.to_string()));
        }

        #[test]
        fn two_ellipses_rejected(a in any::<u16>(), b in any::<u16>(), c in any::<u16>()) {
            let s = format!("{a:x}::{b:x}::{c:x}");
            prop_assert!(parse_ipv6(&s).is_none(), "accepted {}", s);
        }

        #[test]
        fn mapped_ipv4_matches_dotted_quad(
            a in any::<u8>(),
            b in any::<u8>(),
            c in any::<u8>(),
            d in any::<u8>(),
        ) {
            let quad = format!("{a}.{b}.{c}.{d}");
            prop_assert_eq!(parse_ipv6(&format!("::ffff:{quad}")), parse_ipv4(&quad));
        }

        #[test]
        fn domains_are_not_ip_literals(d in domain()) {
            prop_assert!(!looks_like_ip_address(&d));
            prop_assert!(parse_ip(&d).is_none());
        }

        #[test]
        fn parsers_never_panic(s in "[0-9a-fA-F:.\u{3002}\u{ff0e}]{0,48}") {
            let _ = parse_ip(&s);
            let _ = parse_ipv4(&s);
            let _ = parse_ipv6(&s);
        }
    }
}

mod scanner_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn ascii_set_agrees_with_linear_scan(chars in prop::collection::vec(any::<u8>(), 0..32)) {
            let set = AsciiSet::new(&chars);
            for b in 0..=u8::MAX {
                prop_assert_eq!(set.contains(b), chars.contains(&b));
            }
        }

        #[test]
        fn rune_table_agrees_with_linear_scan(
            chars in ".{0,16}",
            samples in prop::collection::vec(any::<char>(), 0..32),
        ) {
            let table = RuneTable::new(&chars);
            for sample in samples.into_iter().chain(chars.chars()) {
                prop_assert_eq!(table.contains(sample), chars.contains(sample));
            }
        }

        #[test]
        fn index_any_ascii_matches_std(s in ".{0,32}") {
            let set = AsciiSet::new(b"/\\?#:");
            prop_assert_eq!(index_any_ascii(&s, &set), s.find(['/', '\\', '?', '#', ':']));
        }

        #[test]
        fn last_byte_before_boundary_matches_std(s in "[a-z@/?#]{0,32}") {
            let boundary = AsciiSet::new(b"/?#");
            let head = s.split(['/', '?', '#']).next().unwrap_or("");
            prop_assert_eq!(index_last_byte_before(&s, b'@', &boundary), head.rfind('@'));
        }

        #[test]
        fn scheme_prefix_is_measured(scheme in scheme(), host in domain()) {
            let url = format!("{scheme}{host}");
            prop_assert_eq!(scan_scheme(&url), Some(scheme.len()));
        }

        #[test]
        fn scan_scheme_never_overruns(s in ".{0,32}") {
            if let Some(end) = scan_scheme(&s) {
                prop_assert!(end <= s.len());
                prop_assert!(s.is_char_boundary(end));
            }
        }
    }
}

mod decompose_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn components_round_trip(
            scheme in prop::option::of(scheme()),
            userinfo in prop::option::of(userinfo()),
            host in domain(),
            port in prop::option::of(any::<u16>()),
            path in prop::option::of(path()),
        ) {
            let mut input = String::new();
            if let Some(s) = &scheme {
                input.push_str(s);
            }
            if let Some(u) = &userinfo {
                input.push_str(u);
                input.push('@');
            }
            input.push_str(&host);
            if let Some(p) = port {
                input.push_str(&format!(":{p}"));
            }
            if let Some(p) = &path {
                input.push_str(p);
            }

            let url = DecomposedUrl::parse(&input);
            prop_assert_eq!(url.scheme(), scheme.as_deref());
            prop_assert_eq!(url.userinfo(), userinfo.as_deref());
            prop_assert_eq!(url.host(), host.as_str());
            prop_assert_eq!(url.host_kind(), HostKind::Domain);
            prop_assert_eq!(url.port_number(), port);
            prop_assert_eq!(url.path(), path.as_deref());
        }

        #[test]
        fn ip_hosts_are_classified(
            a in any::<u8>(),
            b in any::<u8>(),
            c in any::<u8>(),
            d in any::<u8>(),
            v6 in ipv6(),
        ) {
            let input = format!("http://{a}.{b}.{c}.{d}/");
            let url = DecomposedUrl::parse(&input);
            prop_assert_eq!(url.host_kind(), HostKind::Ipv4(IpAddress::from_ipv4(a, b, c, d)));

            let input = format!("http://[{v6}]:443/");
            let url = DecomposedUrl::parse(&input);
            prop_assert_eq!(url.host_kind(), HostKind::Ipv6(IpAddress::from(v6)));
            prop_assert_eq!(url.port(), Some("443"));
        }

        #[test]
        fn decompose_never_panics(s in "\\PC{0,48}") {
            let url = DecomposedUrl::parse(&s);
            prop_assert!(url.path().is_none_or(|p| s.contains(p)));
            prop_assert!(url.userinfo().is_none_or(|u| s.contains(u)));
        }
    }
}
