//! Curated station order for each line.
//!
//! This table is authoritative for sequencing. Trip data only decides which
//! lines serve a station, never where a station sits along a line.

use crate::domain::{LineCode, clean_station_name, display_name};

/// The station every line starts from.
pub const HUB_STATION: &str = "Union Station";

/// Outbound station order per line, hub first and far terminus last.
const CURATED_LINES: &[(&str, &[&str])] = &[
    (
        "LW",
        &[
            HUB_STATION,
            "Exhibition",
            "Mimico",
            "Long Branch",
            "Port Credit",
            "Clarkson",
            "Oakville",
            "Bronte",
            "Appleby",
            "Burlington",
            "Aldershot",
            "Hamilton",
            "West Harbour",
            "St. Catharines",
            "Niagara Falls",
        ],
    ),
    (
        "LE",
        &[
            HUB_STATION,
            "Danforth",
            "Scarborough",
            "Eglinton",
            "Guildwood",
            "Rouge Hill",
            "Pickering",
            "Ajax",
            "Whitby",
            "Oshawa",
        ],
    ),
    (
        "ST",
        &[
            HUB_STATION,
            "Kennedy",
            "Agincourt",
            "Milliken",
            "Unionville",
            "Centennial",
            "Markham",
            "Mount Joy",
            "Stouffville",
            "Lincolnville",
        ],
    ),
    (
        "RH",
        &[
            HUB_STATION,
            "Old Cummer",
            "Langstaff",
            "Richmond Hill",
            "Gormley",
            "Bloomington",
        ],
    ),
    (
        "BR",
        &[
            HUB_STATION,
            "Downsview Park",
            "Rutherford",
            "Maple",
            "King City",
            "Aurora",
            "Newmarket",
            "East Gwillimbury",
            "Bradford",
            "Barrie South",
            "Allandale Waterfront",
        ],
    ),
    (
        "KI",
        &[
            HUB_STATION,
            "Bloor",
            "Weston",
            "Etobicoke North",
            "Malton",
            "Bramalea",
            "Brampton",
            "Mount Pleasant",
            "Georgetown",
            "Acton",
            "Guelph Central",
            "Kitchener",
        ],
    ),
    (
        "MI",
        &[
            HUB_STATION,
            "Kipling",
            "Dixie",
            "Cooksville",
            "Erindale",
            "Streetsville",
            "Meadowvale",
            "Lisgar",
            "Milton",
        ],
    ),
];

/// The ordered stations of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRoute {
    code: LineCode,
    stations: Vec<String>,
    /// Cleaned, lower-cased names, parallel to `stations`.
    keys: Vec<String>,
}

impl LineRoute {
    /// Build a route from its outbound station order.
    pub fn new(code: LineCode, stations: Vec<String>) -> Self {
        let keys = stations.iter().map(|s| station_key(s)).collect();
        Self {
            code,
            stations,
            keys,
        }
    }

    pub fn code(&self) -> &LineCode {
        &self.code
    }

    /// Stations in outbound order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Position of a station along the line, comparing cleaned names.
    pub fn position(&self, station: &str) -> Option<usize> {
        let key = station_key(station);
        self.keys.iter().position(|k| *k == key)
    }

    /// The last station, in passenger-facing form (e.g. "Oshawa GO").
    pub fn far_terminus(&self) -> Option<String> {
        match self.stations.as_slice() {
            [] | [_] => None,
            [.., last] => Some(display_name(last)),
        }
    }
}

/// Lookup key for a station name: cleaned and case-folded.
pub(crate) fn station_key(name: &str) -> String {
    clean_station_name(name).to_lowercase()
}

/// Station order for every line on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    hub: String,
    routes: Vec<LineRoute>,
}

impl LineTopology {
    /// Build a topology from explicit routes.
    pub fn new(hub: impl Into<String>, routes: Vec<LineRoute>) -> Self {
        Self {
            hub: hub.into(),
            routes,
        }
    }

    /// The hand-curated commuter-rail network.
    pub fn curated() -> Self {
        let routes = CURATED_LINES
            .iter()
            .filter_map(|(code, stations)| {
                let code = LineCode::parse(code).ok()?;
                let stations = stations.iter().map(|s| s.to_string()).collect();
                Some(LineRoute::new(code, stations))
            })
            .collect();
        Self::new(HUB_STATION, routes)
    }

    pub fn hub(&self) -> &str {
        &self.hub
    }

    pub fn route(&self, code: &LineCode) -> Option<&LineRoute> {
        self.routes.iter().find(|r| r.code == *code)
    }

    pub fn routes(&self) -> impl Iterator<Item = &LineRoute> {
        self.routes.iter()
    }

    /// Codes of every line with a curated order, in table order.
    pub fn codes(&self) -> Vec<LineCode> {
        self.routes.iter().map(|r| r.code.clone()).collect()
    }
}

impl Default for LineTopology {
    fn default() -> Self {
        Self::curated()
    }
}
