//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::board::ScheduleSynthesizer;
use crate::domain::DepartureEntry;
use crate::network::NetworkError;

use super::dto::*;
use super::state::AppState;

/// Largest board a single request may ask for.
pub const MAX_BOARD_COUNT: usize = 500;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/schedule", get(schedule))
        .route("/api/schedules", get(schedules))
        .route("/api/current_time", get(current_time))
        .route("/api/reload", post(reload))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Station display names in load order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    let network = state.network.current().await;
    Json(
        network
            .station_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Full departure entries for a station.
async fn schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<DepartureEntry>>, AppError> {
    let entries = departures(&state, &query).await?;
    Ok(Json(entries))
}

/// Departures formatted for the board display.
async fn schedules(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<BoardRow>>, AppError> {
    let entries = departures(&state, &query).await?;
    Ok(Json(entries.iter().map(BoardRow::from_entry).collect()))
}

async fn current_time() -> Json<CurrentTime> {
    Json(CurrentTime::at(Local::now().naive_local()))
}

/// Re-read the feed from disk and swap it in.
async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let summary = state.network.reload().await.map_err(AppError::from)?;
    info!(stations = summary.stations, lines = summary.lines, "network reloaded");
    Ok(Json(ReloadResponse {
        status: "success",
        summary,
    }))
}

/// Synthesize the board a query asks for.
async fn departures(state: &AppState, query: &ScheduleQuery) -> Result<Vec<DepartureEntry>, AppError> {
    let count = query.count.unwrap_or(state.config.default_count);
    if count > MAX_BOARD_COUNT {
        return Err(AppError::BadRequest {
            message: format!("count must be at most {MAX_BOARD_COUNT}, got {count}"),
        });
    }

    let network = state.network.current().await;
    let station = query.station.as_deref().unwrap_or(network.hub()).trim();

    let mut rng = state.rng();
    let synthesizer = ScheduleSynthesizer::new(&network, &state.config);
    Ok(synthesizer.generate_at(station, count, Local::now().naive_local(), &mut rng))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
