//! Sorted code-point tables with binary-search membership.

use std::sync::LazyLock;

use crate::constants::{INVALID_HOST_CHARS, LABEL_SEPARATOR_CHARS, WHITESPACE_CHARS};

/// An ascending, deduplicated table of code points.
///
/// Tables are built once from string literals and never mutated, so they
/// can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use host_lexer::RuneTable;
///
/// let table = RuneTable::new("c\u{3002}a");
/// assert_eq!(table.as_slice(), &['a', 'c', '\u{3002}']);
/// assert!(table.contains('\u{3002}'));
/// assert!(!table.contains('b'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RuneTable {
    runes: Vec<char>,
}

impl RuneTable {
    /// Builds a table from every code point in `chars`.
    #[must_use]
    pub fn new(chars: &str) -> Self {
        let mut runes: Vec<char> = chars.chars().collect();
        runes.sort_unstable();
        runes.dedup();
        Self { runes }
    }

    /// Builds a table from the union of several literals.
    #[must_use]
    pub fn from_parts(parts: &[&str]) -> Self {
        Self::new(&parts.concat())
    }

    /// Reports whether `rune` is in the table.
    ///
    /// Closed binary search: the candidate range `[low, high]` always holds
    /// the first element not less than `rune`, or the last element.
    #[must_use]
    pub fn contains(&self, rune: char) -> bool {
        let runes = &self.runes;
        let Some(mut high) = runes.len().checked_sub(1) else {
            return false;
        };
        let mut low = 0;
        while low < high {
            let mid = low + (high - low) / 2;
            if runes[mid] < rune {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        runes[low] == rune
    }

    /// Returns the code points in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.runes
    }

    /// Returns the number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Returns true if the table holds no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }
}

/// `.`, `。`, `．`, `｡`.
pub static LABEL_SEPARATORS: LazyLock<RuneTable> =
    LazyLock::new(|| RuneTable::new(LABEL_SEPARATOR_CHARS));

/// Whitespace trimmed from URL input, including zero-width and BOM runes.
pub static WHITESPACE: LazyLock<RuneTable> = LazyLock::new(|| RuneTable::new(WHITESPACE_CHARS));

/// Code points that make a hostname invalid.
pub static INVALID_HOST: LazyLock<RuneTable> =
    LazyLock::new(|| RuneTable::from_parts(&[INVALID_HOST_CHARS, WHITESPACE_CHARS]));

/// Reports whether `rune` separates hostname labels.
#[must_use]
pub fn is_label_separator(rune: char) -> bool {
    LABEL_SEPARATORS.contains(rune)
}
