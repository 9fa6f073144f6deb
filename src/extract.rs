//! Handing a normalized host to a public-suffix resolver.
//!
//! The resolver itself lives outside this crate. It sees the host's labels
//! right to left (top-level label first) and answers how many of them make
//! up the public suffix; the remaining labels are split into the
//! registrable domain and its subdomain.

use std::ops::Range;

use crate::host::label_ranges;
use crate::scan::reverse;
use crate::url::{DecomposeOptions, DecomposedUrl, decompose};

/// A public-suffix matcher.
///
/// # Examples
///
/// ```
/// use host_lexer::{DecomposeOptions, extract};
///
/// // Every host has a one-label suffix.
/// let tld = |labels: &[&str]| -> usize { usize::from(!labels.is_empty()) };
/// let parts = extract("https://www.example.com/", &DecomposeOptions::default(), &tld);
/// assert_eq!(parts.subdomain(), "www");
/// assert_eq!(parts.domain(), "example");
/// assert_eq!(parts.suffix(), "com");
/// assert_eq!(parts.registered_domain(), "example.com");
/// ```
pub trait SuffixResolver {
    /// Returns how many leading entries of `reversed_labels` form the
    /// public suffix, or 0 when nothing matches.
    ///
    /// `reversed_labels` holds the host's labels from right to left, so
    /// `www.example.co.uk` arrives as `["uk", "co", "example", "www"]`.
    fn suffix_label_count(&self, reversed_labels: &[&str]) -> usize;
}

impl<F> SuffixResolver for F
where
    F: Fn(&[&str]) -> usize,
{
    fn suffix_label_count(&self, reversed_labels: &[&str]) -> usize {
        self(reversed_labels)
    }
}

/// A decomposed URL with its host split around the public suffix.
///
/// Parts are byte ranges into the normalized host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction<'a> {
    url: DecomposedUrl<'a>,
    subdomain: Range<usize>,
    domain: Range<usize>,
    suffix: Range<usize>,
    registered_domain: Range<usize>,
}

impl<'a> Extraction<'a> {
    /// Returns the underlying decomposition.
    #[must_use]
    pub const fn url(&self) -> &DecomposedUrl<'a> {
        &self.url
    }

    /// Returns the labels left of the registrable domain.
    #[must_use]
    pub fn subdomain(&self) -> &str {
        self.part(&self.subdomain)
    }

    /// Returns the label right before the suffix, or the whole host for
    /// IP literals.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.part(&self.domain)
    }

    /// Returns the public suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.part(&self.suffix)
    }

    /// Returns domain and suffix together (e.g., `"example.co.uk"`).
    #[must_use]
    pub fn registered_domain(&self) -> &str {
        self.part(&self.registered_domain)
    }

    fn part(&self, range: &Range<usize>) -> &str {
        self.url.host().get(range.clone()).unwrap_or_default()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Extraction<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Extraction", 5)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("subdomain", self.subdomain())?;
        state.serialize_field("domain", self.domain())?;
        state.serialize_field("suffix", self.suffix())?;
        state.serialize_field("registered_domain", self.registered_domain())?;
        state.end()
    }
}

/// Decomposes `input` and splits its host with `resolver`.
///
/// IP literal hosts are not handed to the resolver; they become the domain
/// and registered domain. With `ignore_subdomains` set the subdomain is
/// left empty.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
#[must_use]
pub fn extract<'a, R>(input: &'a str, options: &DecomposeOptions, resolver: &R) -> Extraction<'a>
where
    R: SuffixResolver + ?Sized,
{
    let url = decompose(input, options);
    let host = url.host();
    let end = host.len();

    if host.is_empty() {
        return Extraction {
            url,
            ..Extraction::default()
        };
    }
    if url.host_kind().is_ip() {
        return Extraction {
            url,
            domain: 0..end,
            registered_domain: 0..end,
            ..Extraction::default()
        };
    }

    let ranges = label_ranges(host);
    let count = ranges.len();
    let suffix_labels = {
        let mut labels: Vec<&str> = ranges.iter().map(|r| &host[r.clone()]).collect();
        reverse(&mut labels);
        resolver.suffix_label_count(&labels).min(count)
    };

    let mut extraction = Extraction {
        subdomain: 0..0,
        domain: 0..0,
        suffix: end..end,
        registered_domain: 0..0,
        ..Extraction::default()
    };

    if suffix_labels > 0 {
        extraction.suffix = ranges[count - suffix_labels].start..end;
    }
    if let Some(domain_idx) = count.checked_sub(suffix_labels + 1) {
        let domain = ranges[domain_idx].clone();
        if suffix_labels > 0 {
            extraction.registered_domain = domain.start..end;
        }
        if domain_idx > 0 && !options.ignore_subdomains {
            extraction.subdomain = 0..ranges[domain_idx - 1].end;
        }
        extraction.domain = domain;
    }

    tracing::trace!(suffix_labels, count, "split host");
    Extraction { url, ..extraction }
}
