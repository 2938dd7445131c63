//! Application state for the web layer.

use std::sync::Arc;

use crate::board::{BoardConfig, BoardRng};
use crate::network::SharedNetwork;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded network, swapped wholesale on reload
    pub network: SharedNetwork,

    /// Board synthesis parameters
    pub config: Arc<BoardConfig>,

    /// Fixed RNG seed; every board is freshly random when unset
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(network: SharedNetwork, config: BoardConfig) -> Self {
        Self {
            network,
            config: Arc::new(config),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for one board.
    pub fn rng(&self) -> BoardRng {
        BoardRng::seeded_or_random(self.seed)
    }
}
