//! Log entry row and its wire representation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Row in the `logs` table.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Shape served by `GET /recent`: same fields, timestamp pre-rendered.
#[derive(Debug, Serialize)]
pub struct ApiLogEntry {
    pub id: i64,
    pub message: String,
    pub created_at: String,
}

impl From<LogEntry> for ApiLogEntry {
    fn from(e: LogEntry) -> Self {
        ApiLogEntry {
            id: e.id,
            message: e.message,
            created_at: e.created_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
        }
    }
}
