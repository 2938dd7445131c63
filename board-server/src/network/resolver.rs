//! Line-code inference from free text.
//!
//! Feeds do not always carry a usable route short name, so the line is
//! recovered from route ids, long names or trip headsigns using ordered
//! substring rules. Every function here is total: when nothing matches the
//! generic fallback code is returned.

use crate::domain::{KNOWN_CODES, LineCode};

/// Line full names, checked first.
const LINE_NAME_RULES: &[(&str, &str)] = &[
    ("lakeshore west", "LW"),
    ("lakeshore east", "LE"),
    ("stouffville", "ST"),
    ("richmond hill", "RH"),
    ("barrie", "BR"),
    ("kitchener", "KI"),
    ("milton", "MI"),
];

/// Well-known destinations, checked when no line name matched.
const DESTINATION_RULES: &[(&str, &str)] = &[
    ("hamilton", "LW"),
    ("aldershot", "LW"),
    ("burlington", "LW"),
    ("oshawa", "LE"),
    ("pickering", "LE"),
    ("ajax", "LE"),
    ("lincolnville", "ST"),
    ("unionville", "ST"),
    ("aurora", "BR"),
    ("bramalea", "KI"),
];

/// Resolves free-text route identifiers to canonical line codes.
///
/// Rule order is fixed and the first match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteCodeResolver;

impl RouteCodeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Extract a code from a route id such as `01250425-LW`.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::network::RouteCodeResolver;
    ///
    /// let resolver = RouteCodeResolver::new();
    /// assert_eq!(resolver.resolve_from_route_id("01250425-LW").as_str(), "LW");
    /// assert_eq!(resolver.resolve_from_route_id("01250425-XX").as_str(), "GO");
    /// assert_eq!(resolver.resolve_from_route_id("LW").as_str(), "GO");
    /// ```
    pub fn resolve_from_route_id(&self, route_id: &str) -> LineCode {
        route_id
            .rsplit_once('-')
            .map(|(_, suffix)| suffix.trim())
            .filter(|suffix| KNOWN_CODES.contains(suffix))
            .and_then(|suffix| LineCode::parse(suffix).ok())
            .unwrap_or_else(LineCode::fallback)
    }

    /// Infer a code from a trip headsign: line names first, then destinations.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::network::RouteCodeResolver;
    ///
    /// let resolver = RouteCodeResolver::new();
    /// assert_eq!(resolver.resolve_from_headsign("Lakeshore West - Hamilton GO").as_str(), "LW");
    /// assert_eq!(resolver.resolve_from_headsign("Oshawa GO").as_str(), "LE");
    /// assert_eq!(resolver.resolve_from_headsign("").as_str(), "GO");
    /// ```
    pub fn resolve_from_headsign(&self, headsign: &str) -> LineCode {
        if headsign.trim().is_empty() {
            return LineCode::fallback();
        }
        first_match(headsign, LINE_NAME_RULES)
            .or_else(|| first_match(headsign, DESTINATION_RULES))
            .unwrap_or_else(LineCode::fallback)
    }

    /// Infer a code from a route long name, e.g. "Lakeshore West".
    pub fn resolve_from_name(&self, long_name: &str) -> LineCode {
        first_match(long_name, LINE_NAME_RULES).unwrap_or_else(LineCode::fallback)
    }
}

fn first_match(text: &str, rules: &[(&str, &str)]) -> Option<LineCode> {
    let lower = text.to_lowercase();
    rules
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .and_then(|(_, code)| LineCode::parse(code).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> RouteCodeResolver {
        RouteCodeResolver::new()
    }

    #[test]
    fn route_id_suffix() {
        assert_eq!(resolver().resolve_from_route_id("01250425-KI").as_str(), "KI");
        assert_eq!(resolver().resolve_from_route_id("a-b-MI").as_str(), "MI");
    }

    #[test]
    fn route_id_without_known_suffix() {
        assert!(resolver().resolve_from_route_id("").is_fallback());
        assert!(resolver().resolve_from_route_id("01250425").is_fallback());
        assert!(resolver().resolve_from_route_id("01250425-lw").is_fallback());
        assert!(resolver().resolve_from_route_id("01250425-").is_fallback());
    }

    #[test]
    fn headsign_line_names() {
        assert_eq!(resolver().resolve_from_headsign("Lakeshore East - Oshawa").as_str(), "LE");
        assert_eq!(resolver().resolve_from_headsign("RICHMOND HILL GO").as_str(), "RH");
        assert_eq!(resolver().resolve_from_headsign("Barrie South GO").as_str(), "BR");
    }

    #[test]
    fn headsign_destinations() {
        assert_eq!(resolver().resolve_from_headsign("West Harbour via Aldershot").as_str(), "LW");
        assert_eq!(resolver().resolve_from_headsign("Pickering GO").as_str(), "LE");
        assert_eq!(resolver().resolve_from_headsign("Unionville GO").as_str(), "ST");
        assert_eq!(resolver().resolve_from_headsign("Aurora GO").as_str(), "BR");
        assert_eq!(resolver().resolve_from_headsign("Bramalea GO").as_str(), "KI");
    }

    #[test]
    fn line_names_beat_destinations() {
        // Plain substring rules: "hamilton" contains the line name "milton"
        assert_eq!(resolver().resolve_from_headsign("Hamilton GO").as_str(), "MI");
        assert_eq!(resolver().resolve_from_headsign("Kitchener via Hamilton").as_str(), "KI");
    }

    #[test]
    fn headsign_without_match() {
        assert!(resolver().resolve_from_headsign("Downtown Express").is_fallback());
        assert!(resolver().resolve_from_headsign("   ").is_fallback());
    }

    #[test]
    fn long_names() {
        assert_eq!(resolver().resolve_from_name("Lakeshore West").as_str(), "LW");
        assert_eq!(resolver().resolve_from_name("GO Train - Stouffville Line").as_str(), "ST");
        // Destination rules do not apply to long names
        assert!(resolver().resolve_from_name("Oshawa").is_fallback());
        assert!(resolver().resolve_from_name("").is_fallback());
    }
}
