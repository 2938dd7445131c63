//! Loading the network from GTFS-style text files.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::domain::{Agency, Line, Station, Stop, Trip};

use super::defaults;
use super::error::NetworkError;
use super::line_topology::{LineTopology, station_key};
use super::records::{AgencyRow, RouteRow, StopRow, TripRow, parse_or_default};
use super::resolver::RouteCodeResolver;
use super::topology::NetworkTopology;

/// Default directory holding the feed files.
const DEFAULT_BASE_PATH: &str = "attached_assets";

pub const AGENCY_FILE: &str = "agency.txt";
pub const ROUTES_FILE: &str = "routes.txt";
pub const STOPS_FILE: &str = "stops.txt";
pub const TRIPS_FILE: &str = "trips.txt";

/// Configuration for the network loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory containing `agency.txt`, `routes.txt`, `stops.txt` and `trips.txt`.
    pub base_path: PathBuf,
}

impl LoaderConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of a table inside the base directory.
    pub fn table_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

/// Reads a network from disk, substituting built-in data for anything
/// missing or unreadable.
///
/// Each table is loaded independently, so one bad file never prevents the
/// others from loading. `load` never fails.
#[derive(Debug, Clone, Default)]
pub struct TabularNetworkLoader {
    config: LoaderConfig,
    resolver: RouteCodeResolver,
}

impl TabularNetworkLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            resolver: RouteCodeResolver::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load all four tables and build the network.
    pub fn load(&self) -> NetworkTopology {
        let agencies = self.load_agencies();
        let lines = self.load_lines();
        let (stops, mut stations) = self.load_stops();
        let trips = self.load_trips(&lines, &mut stations);

        let default_line = defaults::default_station_line();
        for station in stations.iter_mut().filter(|s| s.lines.is_empty()) {
            station.add_line(&default_line);
        }

        let network = NetworkTopology::new(
            agencies,
            lines,
            stops,
            stations,
            trips,
            LineTopology::curated(),
        );

        let summary = network.summary();
        info!(
            routes = summary.lines,
            stops = summary.stops,
            trips = summary.trips,
            stations = summary.stations,
            "loaded network from {}",
            self.config.base_path.display()
        );
        network
    }

    fn load_agencies(&self) -> Vec<Agency> {
        let path = self.config.table_path(AGENCY_FILE);
        let agencies: Vec<Agency> = match read_table::<AgencyRow>(&path) {
            Ok(rows) => rows.into_iter().map(AgencyRow::into_agency).collect(),
            Err(e) => {
                report(&e, "agency");
                Vec::new()
            }
        };

        if agencies.is_empty() {
            return defaults::default_agencies();
        }
        for agency in &agencies {
            debug!(agency = %agency.id, "loaded agency");
        }
        agencies
    }

    fn load_lines(&self) -> Vec<Line> {
        let path = self.config.table_path(ROUTES_FILE);
        let lines: Vec<Line> = match read_table::<RouteRow>(&path) {
            Ok(rows) => rows
                .into_iter()
                .filter_map(|row| row.into_line(&self.resolver))
                .collect(),
            Err(e) => {
                report(&e, "route");
                Vec::new()
            }
        };

        if lines.is_empty() {
            let lines = defaults::default_lines();
            info!("using {} default routes", lines.len());
            return lines;
        }
        info!("loaded {} routes", lines.len());
        lines
    }

    fn load_stops(&self) -> (Vec<Stop>, Vec<Station>) {
        let path = self.config.table_path(STOPS_FILE);
        let stops: Vec<Stop> = match read_table::<StopRow>(&path) {
            Ok(rows) => rows.into_iter().filter_map(StopRow::into_stop).collect(),
            Err(e) => {
                report(&e, "stop");
                Vec::new()
            }
        };

        // Platforms and entrances are reached through their parent.
        let stations: Vec<Station> = stops
            .iter()
            .filter(|s| s.parent_station.is_none())
            .map(Station::from_stop)
            .collect();

        if stations.is_empty() {
            let stations = defaults::default_stations();
            info!("using {} default stations", stations.len());
            return (stops, stations);
        }
        info!("loaded {} stops and {} stations", stops.len(), stations.len());
        (stops, stations)
    }

    /// Load trips, recording which lines serve which stations along the way.
    fn load_trips(&self, lines: &[Line], stations: &mut [Station]) -> Vec<Trip> {
        let path = self.config.table_path(TRIPS_FILE);
        let rows = match read_table::<TripRow>(&path) {
            Ok(rows) => rows,
            Err(e) => {
                report(&e, "trip");
                return Vec::new();
            }
        };

        let keys: Vec<String> = stations.iter().map(|s| station_key(&s.name)).collect();
        let mut trips = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(trip) = self.resolve_trip(row, lines) else {
                continue;
            };

            if !trip.line_code.is_fallback() {
                let headsign = trip.headsign.to_lowercase();
                for (station, key) in stations.iter_mut().zip(&keys) {
                    if !key.is_empty() && headsign.contains(key.as_str()) {
                        station.add_line(&trip.line_code);
                    }
                }
            }
            trips.push(trip);
        }

        info!("loaded {} trips", trips.len());
        trips
    }

    fn resolve_trip(&self, row: TripRow, lines: &[Line]) -> Option<Trip> {
        let id = row.trip_id.filter(|id| !id.is_empty())?;
        let route_id = row.route_id.unwrap_or_default();
        let headsign = row.trip_headsign.unwrap_or_default();

        let mut line_code = lines
            .iter()
            .find(|l| l.route_id == route_id)
            .map(|l| l.code.clone())
            .unwrap_or_else(|| self.resolver.resolve_from_route_id(&route_id));
        if line_code.is_fallback() {
            line_code = self.resolver.resolve_from_headsign(&headsign);
        }

        Some(Trip {
            id,
            route_id,
            service_id: row.service_id.unwrap_or_default(),
            headsign,
            direction_id: parse_or_default(row.direction_id.as_deref()),
            block_id: row.block_id.unwrap_or_default(),
            shape_id: row.shape_id.unwrap_or_default(),
            wheelchair_accessible: parse_or_default::<u8>(row.wheelchair_accessible.as_deref()) == 1,
            bikes_allowed: parse_or_default::<u8>(row.bikes_allowed.as_deref()) == 1,
            line_code,
        })
    }
}

/// Log a table failure at the level its kind deserves.
fn report(err: &NetworkError, table: &str) {
    if err.is_missing() {
        warn!("{err}; using default {table} data");
    } else {
        error!("error loading {table} data: {err}");
    }
}

/// Read every well-formed row of a CSV table.
///
/// Rows that fail to parse are skipped; only a missing or unreadable file
/// is an error.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, NetworkError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => NetworkError::Missing {
            path: path.to_path_buf(),
        },
        _ => NetworkError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // Surface header problems (e.g. invalid UTF-8) as a table failure.
    reader.headers().map_err(|source| NetworkError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => debug!("skipping malformed row {} of {}: {e}", line + 2, path.display()),
        }
    }
    Ok(rows)
}
