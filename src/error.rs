//! Failure reasons reported alongside a decomposed URL.
//!
//! Structural rejections in the scanners are plain `None`/`false`. The
//! types here explain why the decomposer left a host or port empty.

use std::fmt;

/// IDNA conversion of a host to ASCII failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunycodeError {
    /// The host that failed to convert
    pub input: String,
    /// First clause of the underlying IDNA error
    pub reason: String,
}

impl fmt::Display for PunycodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert '{}' to punycode: {}", self.input, self.reason)
    }
}

impl std::error::Error for PunycodeError {}

/// Why a decomposed URL has an empty host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Host holds a forbidden code point or an empty label
    InvalidCharacters {
        /// The rejected host
        host: String,
    },
    /// `[` without a matching `]`
    UnclosedBracket,
    /// Bracketed host is not an IPv6 literal
    InvalidIpv6Literal {
        /// Text between the brackets
        literal: String,
    },
    /// Bytes between `]` and the port or path
    TrailingAfterBracket {
        /// The text after the closing bracket
        trailing: String,
    },
    /// Punycode conversion failed
    Punycode(PunycodeError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacters { host } => write!(
                f,
                "host '{host}' contains invalid characters or consecutive label separators"
            ),
            Self::UnclosedBracket => write!(f, "missing closing bracket for IPv6 literal"),
            Self::InvalidIpv6Literal { literal } => {
                write!(f, "invalid IPv6 address '{literal}'")
            }
            Self::TrailingAfterBracket { trailing } => {
                write!(f, "unexpected '{trailing}' after IPv6 literal")
            }
            Self::Punycode(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Punycode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PunycodeError> for HostError {
    fn from(e: PunycodeError) -> Self {
        Self::Punycode(e)
    }
}

/// Why a port was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// Port holds something other than ASCII digits
    NotNumeric {
        /// The rejected port text
        value: String,
    },
    /// Port is numeric but above 65535
    OutOfRange {
        /// The rejected port text
        value: String,
    },
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric { value } => {
                write!(f, "invalid port '{value}': only ASCII digits allowed")
            }
            Self::OutOfRange { value } => {
                write!(f, "invalid port '{value}': port must be 0-65535")
            }
        }
    }
}

impl std::error::Error for PortError {}
