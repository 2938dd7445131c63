//! Line (route) code type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// The code used when no specific line can be determined.
const FALLBACK: &str = "GO";

/// Codes of the lines on the commuter-rail network.
pub const KNOWN_CODES: &[&str] = &["LW", "LE", "ST", "RH", "BR", "KI", "MI"];

/// A validated line code (e.g. "LW" for Lakeshore West, "ST" for Stouffville).
///
/// Codes are short, non-empty runs of ASCII letters and digits. Parsing trims
/// surrounding whitespace and upper-cases the input, since feeds are not
/// consistent about case.
///
/// # Examples
///
/// ```
/// use board_server::domain::LineCode;
///
/// let lw = LineCode::parse("LW").unwrap();
/// assert_eq!(lw.as_str(), "LW");
///
/// // Case and padding are normalised
/// assert_eq!(LineCode::parse(" st ").unwrap().as_str(), "ST");
///
/// // Empty and punctuated codes are rejected
/// assert!(LineCode::parse("").is_err());
/// assert!(LineCode::parse("L-W").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCode(String);

impl LineCode {
    /// Maximum accepted length of a code.
    pub const MAX_LEN: usize = 8;

    /// Parse a line code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLineCode {
                reason: "must not be empty",
            });
        }

        if trimmed.len() > Self::MAX_LEN {
            return Err(InvalidLineCode {
                reason: "too long",
            });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidLineCode {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(LineCode(trimmed.to_ascii_uppercase()))
    }

    /// The generic network-wide code, used when a line cannot be resolved.
    pub fn fallback() -> Self {
        LineCode(FALLBACK.to_string())
    }

    /// Whether this is the generic fallback code.
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK
    }

    /// Whether this is one of the network's own lines.
    pub fn is_known(&self) -> bool {
        KNOWN_CODES.contains(&self.0.as_str())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LineCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any short alphanumeric string parses, upper-cased
        #[test]
        fn alphanumeric_always_parses(s in "[A-Za-z0-9]{1,8}") {
            let code = LineCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
        }

        /// Parsing is idempotent
        #[test]
        fn reparse_is_identity(s in "[A-Za-z0-9]{1,8}") {
            let code = LineCode::parse(&s).unwrap();
            prop_assert_eq!(LineCode::parse(code.as_str()).unwrap(), code);
        }
    }
}
