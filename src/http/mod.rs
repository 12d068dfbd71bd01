//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod health;
pub mod logs;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/db-check", get(health::db_check))
        .route("/log", post(logs::submit_log))
        .route("/recent", get(logs::recent))
        .route("/recent-file", get(logs::recent_file))
        .with_state(state)
}
