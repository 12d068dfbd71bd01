//! In-memory store (no external database).
//!
//! Honors the same insert/recent/ping contract as the PostgreSQL store;
//! the test suite exercises the full HTTP surface against it.

use crate::models::log_entry::LogEntry;
use crate::store::LogStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// [`LogStore`] over a plain vector; identifiers are handed out in
/// insertion order starting at 1, like a fresh `BIGSERIAL` column.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn insert(&self, line: &str) -> Result<i64, sqlx::Error> {
        let mut entries = self.entries.lock().unwrap();
        let id = entries.last().map_or(1, |e| e.id + 1);
        entries.push(LogEntry {
            id,
            message: line.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<LogEntry>, sqlx::Error> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
