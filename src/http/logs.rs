//! Log submission and the two recent-entry readers.

use crate::{app::AppState, models::log_entry::ApiLogEntry, util::wall_clock_stamp};
use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::{error, info};

/// Window served by both recent-entry readers.
const RECENT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct LogForm {
  /// An absent field reads as an empty message.
  #[serde(default)]
  pub message: String,
}

/// `POST /log`: stamp the message, insert the row, append the mirror line.
///
/// The two writes are independent; a failure in the second does not roll
/// back the first, so the stores can diverge.
pub async fn submit_log(
  State(state): State<AppState>,
  Form(form): Form<LogForm>,
) -> impl IntoResponse {
  let msg = form.message.trim();
  if msg.is_empty() {
    return (StatusCode::BAD_REQUEST, "Message is required").into_response();
  }

  let line = format!("[{}] {}", wall_clock_stamp(), msg);

  let id = match state.store.insert(&line).await {
    Ok(id) => id,
    Err(e) => {
      error!("log insert failed: {e}");
      return (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response();
    }
  };

  if let Err(e) = state.file_log.append(&line).await {
    error!("mirror append failed (db row {id} already written): {e}");
    return (StatusCode::INTERNAL_SERVER_ERROR, "file error").into_response();
  }

  info!("stored log entry id={id}");
  "Message logged to PostgreSQL + file ✅".into_response()
}

/// `GET /recent`: the ten newest rows, descending id.
pub async fn recent(State(state): State<AppState>) -> impl IntoResponse {
  match state.store.recent(RECENT_LIMIT as i64).await {
    Ok(rows) => {
      let out: Vec<ApiLogEntry> = rows.into_iter().map(ApiLogEntry::from).collect();
      Json(out).into_response()
    }
    Err(e) => {
      error!("recent query failed: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response()
    }
  }
}

/// `GET /recent-file`: the last ten mirror lines, in file order (oldest of
/// the window first — the opposite of `/recent`).
pub async fn recent_file(State(state): State<AppState>) -> impl IntoResponse {
  match state.file_log.tail(RECENT_LIMIT).await {
    Ok(lines) => Json(lines).into_response(),
    Err(e) => {
      error!("mirror read failed: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "file error").into_response()
    }
  }
}
