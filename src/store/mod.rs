//! Durable log store.
//!
//! [`LogStore`] is the narrow seam between handlers and storage: insert one
//! pre-stamped line, read back the newest N, answer a connectivity probe.
//! `pg` backs it with PostgreSQL; `memory` is the in-process stand-in the
//! test suite runs against.

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use crate::models::log_entry::LogEntry;
use async_trait::async_trait;

#[async_trait]
pub trait LogStore: Send + Sync {
    /// Live round trip: open a connection, run a trivial query, close it.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Insert one line; returns the identifier the store assigned.
    async fn insert(&self, line: &str) -> Result<i64, sqlx::Error>;

    /// Newest `limit` entries, descending identifier.
    async fn recent(&self, limit: i64) -> Result<Vec<LogEntry>, sqlx::Error>;
}
