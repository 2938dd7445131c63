//! Stops, stations and station-name normalisation.

use serde::Serialize;

use super::LineCode;

/// Brand suffix appended to passenger-facing station names.
pub const BRAND_SUFFIX: &str = " GO";

/// Suffix that marks a name as already station-like.
const STATION_SUFFIX: &str = " Station";

/// A stop as it appears in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub code: String,
    pub description: String,
    pub location_type: u8,
    /// Id of the parent station, if this stop is a platform or entrance.
    pub parent_station: Option<String>,
    pub accessible: bool,
}

/// A passenger-facing station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: String,
    /// Display name, e.g. "Kennedy GO" or "Union Station".
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub accessible: bool,
    /// Lines serving this station, in the order they were discovered.
    pub lines: Vec<LineCode>,
}

impl Station {
    /// Promote a feed stop to a station with no lines yet.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.clone(),
            name: display_name(&stop.name),
            lat: stop.lat,
            lon: stop.lon,
            accessible: stop.accessible,
            lines: Vec::new(),
        }
    }

    /// Record that `code` serves this station. Duplicates are ignored.
    pub fn add_line(&mut self, code: &LineCode) {
        if !self.lines.contains(code) {
            self.lines.push(code.clone());
        }
    }

    /// Whether `code` serves this station.
    pub fn is_served_by(&self, code: &LineCode) -> bool {
        self.lines.contains(code)
    }
}

/// Build the passenger-facing name for a stop.
///
/// Appends the brand suffix unless the name already ends in it or in
/// " Station".
///
/// # Examples
///
/// ```
/// use board_server::domain::display_name;
///
/// assert_eq!(display_name("Kennedy"), "Kennedy GO");
/// assert_eq!(display_name("Kennedy GO"), "Kennedy GO");
/// assert_eq!(display_name("Union Station"), "Union Station");
/// ```
pub fn display_name(stop_name: &str) -> String {
    let name = stop_name.trim();
    if strip_suffix_ignore_case(name, BRAND_SUFFIX).is_some()
        || strip_suffix_ignore_case(name, STATION_SUFFIX).is_some()
    {
        name.to_string()
    } else {
        format!("{name}{BRAND_SUFFIX}")
    }
}

/// Strip brand suffixes and parenthetical line tags from a station name.
///
/// This is the single normalisation used on both sides of every station
/// comparison, and for display in stop lists.
///
/// # Examples
///
/// ```
/// use board_server::domain::clean_station_name;
///
/// assert_eq!(clean_station_name("Union Station"), "Union");
/// assert_eq!(clean_station_name("Kennedy GO"), "Kennedy");
/// assert_eq!(clean_station_name("Bramalea GO (KI)"), "Bramalea");
/// assert_eq!(clean_station_name("Agincourt"), "Agincourt");
/// ```
pub fn clean_station_name(name: &str) -> String {
    let mut cleaned = name.trim();

    // Tags like "(LW)" or "(LW/MI)" may trail the name; suffixes match in any case.
    if let Some(open) = cleaned.rfind('(')
        && cleaned.ends_with(')')
        && is_line_tag(&cleaned[open + 1..cleaned.len() - 1])
    {
        cleaned = cleaned[..open].trim_end();
    }

    loop {
        if let Some(rest) = strip_suffix_ignore_case(cleaned, BRAND_SUFFIX) {
            cleaned = rest.trim_end();
        } else if let Some(rest) = strip_suffix_ignore_case(cleaned, STATION_SUFFIX) {
            cleaned = rest.trim_end();
        } else {
            break;
        }
    }

    cleaned.to_string()
}

/// A tag is one or more of the network's own line codes.
fn is_line_tag(tag: &str) -> bool {
    let mut parts = tag.split(['/', ',', ' ']).filter(|part| !part.is_empty()).peekable();
    parts.peek().is_some()
        && parts.all(|part| LineCode::parse(part).is_ok_and(|code| code.is_known()))
}

/// `strip_suffix` with an ASCII case-insensitive suffix.
fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    let tail = name.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &name[..split])
}

/// Compare two station names after cleaning both.
pub fn same_station(a: &str, b: &str) -> bool {
    clean_station_name(a).eq_ignore_ascii_case(&clean_station_name(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(name: &str) -> Stop {
        Stop {
            id: "KE".to_string(),
            name: name.to_string(),
            lat: 43.7732,
            lon: -79.2683,
            code: String::new(),
            description: String::new(),
            location_type: 0,
            parent_station: None,
            accessible: true,
        }
    }

    #[test]
    fn display_name_appends_suffix_once() {
        assert_eq!(display_name("Oshawa"), "Oshawa GO");
        assert_eq!(display_name("Oshawa GO"), "Oshawa GO");
        assert_eq!(display_name("  Oshawa  "), "Oshawa GO");
        assert_eq!(display_name("Union Station"), "Union Station");
    }

    #[test]
    fn display_name_suffix_any_case() {
        assert_eq!(display_name("Agincourt go"), "Agincourt go");
        assert_eq!(display_name("UNION STATION"), "UNION STATION");
        assert_eq!(display_name("Gormley"), "Gormley GO");
    }

    #[test]
    fn clean_strips_suffixes() {
        assert_eq!(clean_station_name("Union Station"), "Union");
        assert_eq!(clean_station_name("Mount Joy GO"), "Mount Joy");
        assert_eq!(clean_station_name("Richmond Hill GO"), "Richmond Hill");
    }

    #[test]
    fn clean_strips_suffixes_in_any_case() {
        assert_eq!(clean_station_name("Kennedy go"), "Kennedy");
        assert_eq!(clean_station_name("UNION STATION"), "UNION");
        assert_eq!(clean_station_name("Agincourt Go (st)"), "Agincourt");
        // Multi-byte names never split mid-character
        assert_eq!(clean_station_name("Québec"), "Québec");
        assert_eq!(clean_station_name("go"), "go");
    }

    #[test]
    fn clean_keeps_interior_words() {
        // "GO" inside a word is not a suffix
        assert_eq!(clean_station_name("Gormley"), "Gormley");
        assert_eq!(clean_station_name("Port Credit"), "Port Credit");
    }

    #[test]
    fn clean_strips_line_tags() {
        assert_eq!(clean_station_name("Bramalea GO (KI)"), "Bramalea");
        assert_eq!(clean_station_name("Union Station (LW/LE)"), "Union");
    }

    #[test]
    fn clean_keeps_non_tag_parentheses() {
        assert_eq!(
            clean_station_name("Exhibition (Temporary Platform)"),
            "Exhibition (Temporary Platform)"
        );
        assert_eq!(clean_station_name("Bloor (West)"), "Bloor (West)");
        assert_eq!(clean_station_name("Bloor (LW/XX)"), "Bloor (LW/XX)");
    }

    #[test]
    fn clean_is_idempotent() {
        for name in ["Union Station", "Kennedy GO", "Bramalea GO (KI)", "Aurora"] {
            let once = clean_station_name(name);
            assert_eq!(clean_station_name(&once), once);
        }
    }

    #[test]
    fn same_station_ignores_suffix_and_case() {
        assert!(same_station("Union", "Union Station"));
        assert!(same_station("kennedy go", "Kennedy"));
        assert!(same_station("UNION STATION", "Union"));
        assert!(!same_station("Kennedy", "Kipling"));
    }

    #[test]
    fn station_from_stop() {
        let station = Station::from_stop(&stop("Kennedy"));
        assert_eq!(station.name, "Kennedy GO");
        assert_eq!(station.id, "KE");
        assert!(station.lines.is_empty());
        assert!(station.accessible);
    }

    #[test]
    fn add_line_deduplicates() {
        let mut station = Station::from_stop(&stop("Kennedy"));
        let st = LineCode::parse("ST").unwrap();
        station.add_line(&st);
        station.add_line(&st);
        assert_eq!(station.lines, vec![st.clone()]);
        assert!(station.is_served_by(&st));
    }
}
