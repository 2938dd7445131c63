//! Transit network model.
//!
//! Loads a GTFS-style feed (agencies, routes, stops, trips) into an
//! immutable [`NetworkTopology`], falling back to a built-in commuter-rail
//! network for anything missing. Line-code inference and stop sequencing
//! live here too, since both depend only on the network.

mod defaults;
mod error;
mod line_topology;
mod loader;
mod records;
mod resolver;
mod sequencer;
mod shared;
mod topology;

pub use error::NetworkError;
pub use line_topology::{HUB_STATION, LineRoute, LineTopology};
pub use loader::{
    AGENCY_FILE, LoaderConfig, ROUTES_FILE, STOPS_FILE, TRIPS_FILE, TabularNetworkLoader,
};
pub use records::{AgencyRow, RouteRow, StopRow, TripRow};
pub use resolver::RouteCodeResolver;
pub use sequencer::{DEFAULT_MAX_STOPS, EXPRESS_SERVICE, STOP_SEPARATOR, StopSequencer};
pub use shared::SharedNetwork;
pub use topology::{NetworkSummary, NetworkTopology, Terminals};
