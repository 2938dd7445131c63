//! Commuter-rail departure board server.
//!
//! Loads a transit network from GTFS-style tables and synthesizes a
//! plausible departure board for any station on it.

pub mod board;
pub mod domain;
pub mod network;
pub mod web;
