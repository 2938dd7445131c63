//! Trip record.

use super::LineCode;

/// A single scheduled journey along a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    pub service_id: String,
    pub headsign: String,
    /// GTFS `direction_id`: 0 or 1, meaning defined per feed.
    pub direction_id: u8,
    pub block_id: String,
    pub shape_id: String,
    pub wheelchair_accessible: bool,
    pub bikes_allowed: bool,
    /// Line code resolved from the route, or from the headsign when the
    /// route only carries the generic code.
    pub line_code: LineCode,
}
