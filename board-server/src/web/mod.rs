//! Web layer for the departure board.
//!
//! A thin JSON surface over the board synthesizer and the shared network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, MAX_BOARD_COUNT, create_router};
pub use state::AppState;
