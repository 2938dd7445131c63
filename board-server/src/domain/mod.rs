//! Domain types for the departure board.
//!
//! This module contains the typed records that represent a loaded transit
//! network and the synthesized board entries built from it. Value types
//! enforce their invariants at construction, so code that receives them can
//! trust their validity.

mod agency;
mod color;
mod departure;
mod line;
mod line_code;
mod station;
mod trip;

pub use agency::Agency;
pub use color::{HexColor, InvalidColor};
pub use departure::{DepartureEntry, DepartureStatus, Direction, EXPRESS_MARKER, estimate_text};
pub use line::{Line, ROUTE_TYPE_RAIL};
pub use line_code::{InvalidLineCode, KNOWN_CODES, LineCode};
pub use station::{BRAND_SUFFIX, Station, Stop, clean_station_name, display_name, same_station};
pub use trip::Trip;
