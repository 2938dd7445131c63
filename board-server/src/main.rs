use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use board_server::board::BoardConfig;
use board_server::network::{LoaderConfig, SharedNetwork, TabularNetworkLoader};
use board_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Feed location
    let loader_config = match std::env::var("GTFS_DIR") {
        Ok(dir) => LoaderConfig::new(dir),
        Err(_) => LoaderConfig::default(),
    };
    info!("loading network from {}", loader_config.base_path.display());
    let network = SharedNetwork::load(TabularNetworkLoader::new(loader_config));

    let seed = match std::env::var("BOARD_SEED") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!("ignoring BOARD_SEED={raw:?}: {e}");
                None
            }
        },
        Err(_) => None,
    };

    let state = AppState::new(network, BoardConfig::default()).with_seed(seed);
    let app = create_router(state);

    let addr_str = std::env::var("BOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = match addr_str.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid BOARD_ADDR {addr_str:?}: {e}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!("departure board listening on http://{addr}");
    info!("  GET  /health");
    info!("  GET  /api/stations");
    info!("  GET  /api/schedule?station=&count=");
    info!("  GET  /api/schedules?station=");
    info!("  GET  /api/current_time");
    info!("  POST /api/reload");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
