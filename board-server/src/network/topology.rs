//! The loaded transit network.

use serde::Serialize;

use crate::domain::{Agency, HexColor, Line, LineCode, Station, Stop, Trip};

use super::defaults;
use super::line_topology::LineTopology;

/// The two ends of a line as seen from the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terminals {
    /// Where outbound trips start (the hub).
    pub origin: String,
    /// Where outbound trips end. `None` for lines without a curated order.
    pub far: Option<String>,
}

/// Record counts for a loaded network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub agencies: usize,
    pub lines: usize,
    pub stops: usize,
    pub stations: usize,
    pub trips: usize,
}

/// A fully loaded, read-only transit network.
///
/// Built once by the loader and shared by reference; a reload builds a new
/// value rather than mutating this one. All lookups are total: unknown
/// lines and stations degrade to defaults instead of failing.
#[derive(Debug, Clone)]
pub struct NetworkTopology {
    agencies: Vec<Agency>,
    lines: Vec<Line>,
    stops: Vec<Stop>,
    stations: Vec<Station>,
    trips: Vec<Trip>,
    line_topology: LineTopology,
}

impl NetworkTopology {
    pub fn new(
        agencies: Vec<Agency>,
        lines: Vec<Line>,
        stops: Vec<Stop>,
        stations: Vec<Station>,
        trips: Vec<Trip>,
        line_topology: LineTopology,
    ) -> Self {
        Self {
            agencies,
            lines,
            stops,
            stations,
            trips,
            line_topology,
        }
    }

    /// The built-in network, as loaded when no feed files exist.
    pub fn default_network() -> Self {
        Self::new(
            defaults::default_agencies(),
            defaults::default_lines(),
            Vec::new(),
            defaults::default_stations(),
            Vec::new(),
            LineTopology::curated(),
        )
    }

    /// Station display names in load order.
    pub fn station_names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }

    /// Exact display-name lookup.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    pub fn station_by_id(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Colour for a line, grey when the line is unknown.
    pub fn line_color(&self, code: &LineCode) -> HexColor {
        self.line(code)
            .map(|l| l.color)
            .unwrap_or_else(HexColor::default_grey)
    }

    /// Origin and far terminus of a line.
    ///
    /// Unknown lines yield an origin-only pair at the hub.
    pub fn terminals(&self, code: &LineCode) -> Terminals {
        Terminals {
            origin: self.hub().to_string(),
            far: self
                .line_topology
                .route(code)
                .and_then(|route| route.far_terminus()),
        }
    }

    /// Name of the station every line starts from.
    pub fn hub(&self) -> &str {
        self.line_topology.hub()
    }

    /// The station to show when the requested one is unknown: the hub if the
    /// network has it, otherwise the first station loaded.
    pub fn primary_station(&self) -> Option<&Station> {
        self.station_by_name(self.hub())
            .or_else(|| self.stations.first())
    }

    /// First line with the given code.
    pub fn line(&self, code: &LineCode) -> Option<&Line> {
        self.lines.iter().find(|l| l.code == *code)
    }

    /// Line codes with a curated station order.
    pub fn known_line_codes(&self) -> Vec<LineCode> {
        self.line_topology.codes()
    }

    /// Platforms and entrances belonging to a parent station.
    pub fn stops_for_station(&self, station_id: &str) -> Vec<&Stop> {
        self.stops
            .iter()
            .filter(|s| s.parent_station.as_deref() == Some(station_id))
            .collect()
    }

    pub fn agencies(&self) -> &[Agency] {
        &self.agencies
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn line_topology(&self) -> &LineTopology {
        &self.line_topology
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            agencies: self.agencies.len(),
            lines: self.lines.len(),
            stops: self.stops.len(),
            stations: self.stations.len(),
            trips: self.trips.len(),
        }
    }
}

impl Default for NetworkTopology {
    fn default() -> Self {
        Self::default_network()
    }
}
