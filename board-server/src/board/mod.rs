//! Departure board synthesis.

mod config;
mod rng;
mod synthesizer;

pub use config::BoardConfig;
pub use rng::BoardRng;
pub use synthesizer::ScheduleSynthesizer;
