//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{DepartureEntry, DepartureStatus};
use crate::network::NetworkSummary;

/// Query for a station's board.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    /// Station display name; the hub is shown when absent or unknown
    pub station: Option<String>,

    /// Number of candidate departures (defaults to the configured count)
    pub count: Option<usize>,
}

/// A departure formatted for the board display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRow {
    /// Departure time, `HH:MM`
    pub departure: String,

    /// Upper-cased destination label
    pub destination: String,

    /// Line code followed by the destination, e.g. "LE Oshawa"
    pub train: String,

    /// Platform (or "-") for trains on time, otherwise the status text
    pub status: String,

    /// Line colour, `#RRGGBB`
    pub color: String,

    pub accessible: bool,
}

impl BoardRow {
    pub fn from_entry(entry: &DepartureEntry) -> Self {
        let status = match entry.status {
            DepartureStatus::OnTime => entry.platform.clone().unwrap_or_else(|| "-".to_string()),
            other => other.as_str().to_string(),
        };

        Self {
            departure: entry.departure_time.format("%H:%M").to_string(),
            destination: entry.destination.to_uppercase(),
            train: format!("{} {}", entry.line_code, entry.destination),
            status,
            color: entry.color.to_string(),
            accessible: entry.accessible,
        }
    }
}

/// Wall-clock time for the board header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentTime {
    /// `HH:MM:SS`
    pub time: String,

    /// `YYYY-MM-DD`
    pub date: String,
}

impl CurrentTime {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            time: now.format("%H:%M:%S").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Result of reloading the network.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: &'static str,

    #[serde(flatten)]
    pub summary: NetworkSummary,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
