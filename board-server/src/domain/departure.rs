//! Departure board entries.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use super::{HexColor, LineCode};

/// Marker appended to the destination of express trains.
pub const EXPRESS_MARKER: &str = " EXPRESS";

/// Direction of travel relative to the hub station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Away from the hub, toward the line's far terminus.
    Outbound,
    /// Toward the hub.
    Inbound,
}

impl Direction {
    /// Trains alternate direction down the board, starting outbound.
    pub fn for_index(i: usize) -> Self {
        if i % 2 == 0 {
            Direction::Outbound
        } else {
            Direction::Inbound
        }
    }
}

/// What the board shows in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartureStatus {
    OnTime,
    Delayed,
    Cancelled,
    AtPlatform,
}

impl DepartureStatus {
    /// Text shown on the board.
    pub fn as_str(&self) -> &'static str {
        match self {
            DepartureStatus::OnTime => "On time",
            DepartureStatus::Delayed => "Delayed",
            DepartureStatus::Cancelled => "Cancelled",
            DepartureStatus::AtPlatform => "At Platform",
        }
    }

    /// Whether a platform may be shown for a train in this state.
    pub fn shows_platform(&self) -> bool {
        matches!(self, DepartureStatus::OnTime | DepartureStatus::AtPlatform)
    }
}

impl fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DepartureStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One synthesized row of a departure board.
///
/// Built fresh per request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartureEntry {
    pub departure_time: NaiveDateTime,
    /// Destination label, including the express marker when applicable.
    pub destination: String,
    pub status: DepartureStatus,
    /// Human-readable estimate, e.g. "On time" or "12 min delay".
    pub estimated: String,
    /// Present only when the status is `Delayed`.
    pub delay_minutes: Option<u32>,
    /// Withheld unless the train is on time or at the platform.
    pub platform: Option<String>,
    pub line_code: LineCode,
    pub color: HexColor,
    pub train_number: String,
    pub accessible: bool,
    pub direction: Direction,
    pub is_express: bool,
    pub at_platform: bool,
    /// Formatted intermediate stops, or "Express Service".
    pub stops: String,
}

impl DepartureEntry {
    /// Board ordering: trains at the platform first, then by departure time.
    pub fn board_order(a: &Self, b: &Self) -> std::cmp::Ordering {
        b.at_platform
            .cmp(&a.at_platform)
            .then(a.departure_time.cmp(&b.departure_time))
    }
}

/// The estimate text for a status.
///
/// # Examples
///
/// ```
/// use board_server::domain::{DepartureStatus, estimate_text};
///
/// assert_eq!(estimate_text(DepartureStatus::OnTime, None), "On time");
/// assert_eq!(estimate_text(DepartureStatus::Delayed, Some(12)), "12 min delay");
/// assert_eq!(estimate_text(DepartureStatus::Cancelled, None), "Cancelled");
/// ```
pub fn estimate_text(status: DepartureStatus, delay_minutes: Option<u32>) -> String {
    match (status, delay_minutes) {
        (DepartureStatus::Delayed, Some(mins)) => format!("{mins} min delay"),
        _ => status.as_str().to_string(),
    }
}
