//! Line (GTFS route) record.

use serde::Serialize;

use super::{HexColor, LineCode};

/// GTFS `route_type` for rail services.
pub const ROUTE_TYPE_RAIL: u16 = 2;

/// A named service with a code and display colours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Feed-assigned route id.
    pub route_id: String,
    pub code: LineCode,
    pub short_name: String,
    pub long_name: String,
    pub agency_id: String,
    pub route_type: u16,
    pub color: HexColor,
    pub text_color: HexColor,
}

impl Line {
    /// A rail line with white text, keyed by its own code.
    pub fn rail(code: LineCode, long_name: &str, color: HexColor) -> Self {
        Self {
            route_id: code.as_str().to_string(),
            short_name: code.as_str().to_string(),
            code,
            long_name: long_name.to_string(),
            agency_id: "GO".to_string(),
            route_type: ROUTE_TYPE_RAIL,
            color,
            text_color: HexColor::white(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_line_uses_code_as_ids() {
        let code = LineCode::parse("MI").unwrap();
        let line = Line::rail(code.clone(), "Milton", HexColor::rgb(0x00, 0x52, 0xA5));
        assert_eq!(line.route_id, "MI");
        assert_eq!(line.short_name, "MI");
        assert_eq!(line.code, code);
        assert_eq!(line.route_type, ROUTE_TYPE_RAIL);
        assert_eq!(line.text_color, HexColor::white());
    }
}
