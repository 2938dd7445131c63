//! Shared, reloadable network handle.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::NetworkError;
use super::loader::TabularNetworkLoader;
use super::topology::{NetworkSummary, NetworkTopology};

/// Thread-safe access to the current network.
///
/// Readers take a cheap snapshot (`Arc`) and work on it without holding the
/// lock. A reload builds the complete replacement first and then swaps it in,
/// so no reader ever observes a partially loaded network.
#[derive(Clone)]
pub struct SharedNetwork {
    inner: Arc<RwLock<Arc<NetworkTopology>>>,
    loader: TabularNetworkLoader,
}

impl SharedNetwork {
    /// Load the network from disk.
    pub fn load(loader: TabularNetworkLoader) -> Self {
        let network = loader.load();
        Self::with_network(network, loader)
    }

    /// Wrap an already-built network.
    pub fn with_network(network: NetworkTopology, loader: TabularNetworkLoader) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(network))),
            loader,
        }
    }

    /// The network as of now.
    pub async fn current(&self) -> Arc<NetworkTopology> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Re-read the feed and replace the current network wholesale.
    ///
    /// The feed is read on the blocking pool. If loading does not complete,
    /// the current network stays in place.
    pub async fn reload(&self) -> Result<NetworkSummary, NetworkError> {
        let loader = self.loader.clone();
        let network = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|source| NetworkError::Interrupted { source })?;
        let summary = network.summary();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(network);

        Ok(summary)
    }
}
