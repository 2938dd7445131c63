//! Display colour type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid hex colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour: {reason}")]
pub struct InvalidColor {
    reason: &'static str,
}

/// An RGB display colour, rendered as `#RRGGBB`.
///
/// GTFS stores route colours as six hex digits without the leading `#`;
/// both forms are accepted.
///
/// # Examples
///
/// ```
/// use board_server::domain::HexColor;
///
/// let blue = HexColor::parse("00A0DF").unwrap();
/// assert_eq!(blue.to_string(), "#00A0DF");
/// assert_eq!(HexColor::parse("#00a0df").unwrap(), blue);
///
/// assert!(HexColor::parse("blue").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Create a colour from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        HexColor([r, g, b])
    }

    /// The neutral grey used for unknown lines.
    pub const fn default_grey() -> Self {
        HexColor::rgb(0x4D, 0x4D, 0x4D)
    }

    /// White, the default text colour on line badges.
    pub const fn white() -> Self {
        HexColor::rgb(0xFF, 0xFF, 0xFF)
    }

    /// Black, the GTFS default text colour.
    pub const fn black() -> Self {
        HexColor::rgb(0x00, 0x00, 0x00)
    }

    /// Parse `RRGGBB` or `#RRGGBB` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            return Err(InvalidColor {
                reason: "expected six hex digits",
            });
        }

        let bytes = hex.as_bytes();
        let mut rgb = [0u8; 3];
        for (i, pair) in bytes.chunks(2).enumerate() {
            let (Some(hi), Some(lo)) = (hex_value(pair[0]), hex_value(pair[1])) else {
                return Err(InvalidColor {
                    reason: "non-hex digit",
                });
            };
            rgb[i] = hi << 4 | lo;
        }

        Ok(HexColor(rgb))
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor::default_grey()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
