//! Liveness and database connectivity probes.

use crate::app::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

/// `GET /health`: fixed success indicator, no side effects.
pub async fn health() -> impl IntoResponse {
  Json(json!({"status": "ok"}))
}

/// `GET /db-check`: one live open/`SELECT 1`/close round trip against the
/// durable store. Failures are caught here and reported with their cause.
pub async fn db_check(State(state): State<AppState>) -> impl IntoResponse {
  match state.store.ping().await {
    Ok(()) => Json(json!({"db": "ok"})).into_response(),
    Err(e) => {
      error!("db-check failed: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"db": "error", "detail": e.to_string()})),
      )
        .into_response()
    }
  }
}
