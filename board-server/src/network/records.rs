//! Feed table rows.
//!
//! These types map directly to the columns of the GTFS-style text files.
//! Every column is optional: feeds omit columns freely, and an absent value
//! is replaced by a safe default when the row is converted to a domain
//! record.

use serde::Deserialize;

use crate::domain::{Agency, HexColor, Line, LineCode, Stop};

use super::resolver::RouteCodeResolver;

/// A row of `agency.txt`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgencyRow {
    pub agency_id: Option<String>,
    pub agency_name: Option<String>,
    pub agency_url: Option<String>,
    pub agency_timezone: Option<String>,
    pub agency_lang: Option<String>,
    pub agency_phone: Option<String>,
    pub agency_fare_url: Option<String>,
}

impl AgencyRow {
    pub fn into_agency(self) -> Agency {
        let fallback = Agency::fallback();
        Agency {
            id: self.agency_id.unwrap_or(fallback.id),
            name: self.agency_name.unwrap_or(fallback.name),
            url: self.agency_url.unwrap_or_default(),
            timezone: self.agency_timezone.unwrap_or_default(),
            lang: self.agency_lang.unwrap_or_default(),
            phone: self.agency_phone.unwrap_or_default(),
            fare_url: self.agency_fare_url.unwrap_or_default(),
        }
    }
}

/// A row of `routes.txt`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteRow {
    pub route_id: Option<String>,
    pub agency_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub route_type: Option<String>,
    pub route_color: Option<String>,
    pub route_text_color: Option<String>,
}

impl RouteRow {
    /// Convert to a line. Rows without a route id are dropped.
    ///
    /// The code is the short name when it is a valid code; otherwise it is
    /// inferred from the names.
    pub fn into_line(self, resolver: &RouteCodeResolver) -> Option<Line> {
        let route_id = self.route_id.filter(|id| !id.is_empty())?;
        let short_name = self.route_short_name.unwrap_or_default();
        let long_name = self.route_long_name.unwrap_or_default();

        let code = LineCode::parse(&short_name).unwrap_or_else(|_| {
            let from_short = resolver.resolve_from_name(&short_name);
            if from_short.is_fallback() {
                resolver.resolve_from_name(&long_name)
            } else {
                from_short
            }
        });

        Some(Line {
            route_id,
            code,
            short_name,
            long_name,
            agency_id: self.agency_id.unwrap_or_default(),
            route_type: parse_or_default(self.route_type.as_deref()),
            color: parse_color(self.route_color.as_deref()).unwrap_or_default(),
            text_color: parse_color(self.route_text_color.as_deref())
                .unwrap_or_else(HexColor::black),
        })
    }
}

/// A row of `stops.txt`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StopRow {
    pub stop_id: Option<String>,
    pub stop_code: Option<String>,
    pub stop_name: Option<String>,
    pub stop_desc: Option<String>,
    pub stop_lat: Option<String>,
    pub stop_lon: Option<String>,
    pub location_type: Option<String>,
    pub parent_station: Option<String>,
    pub wheelchair_boarding: Option<String>,
}

impl StopRow {
    /// Convert to a stop. Rows without a stop id are dropped.
    pub fn into_stop(self) -> Option<Stop> {
        let id = self.stop_id.filter(|id| !id.is_empty())?;
        let name = self
            .stop_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Stop {id}"));
        let wheelchair: u8 = parse_or_default(self.wheelchair_boarding.as_deref());

        Some(Stop {
            name,
            lat: parse_or_default(self.stop_lat.as_deref()),
            lon: parse_or_default(self.stop_lon.as_deref()),
            code: self.stop_code.unwrap_or_default(),
            description: self.stop_desc.unwrap_or_default(),
            location_type: parse_or_default(self.location_type.as_deref()),
            parent_station: self.parent_station.filter(|p| !p.is_empty()),
            accessible: wheelchair > 0,
            id,
        })
    }
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripRow {
    pub route_id: Option<String>,
    pub service_id: Option<String>,
    pub trip_id: Option<String>,
    pub trip_headsign: Option<String>,
    pub direction_id: Option<String>,
    pub block_id: Option<String>,
    pub shape_id: Option<String>,
    pub wheelchair_accessible: Option<String>,
    pub bikes_allowed: Option<String>,
}

/// Parse a numeric column, falling back to the type's default.
pub(crate) fn parse_or_default<T: std::str::FromStr + Default>(value: Option<&str>) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}

fn parse_color(value: Option<&str>) -> Option<HexColor> {
    value.and_then(|v| HexColor::parse(v).ok())
}
