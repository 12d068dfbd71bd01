//! PostgreSQL-backed store for the `logs` table.

use crate::config::Config;
use crate::models::log_entry::LogEntry;
use crate::store::LogStore;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection, PgPool};

/// Store backed by PostgreSQL.
///
/// The pool connects lazily so the process can start while the database is
/// still coming up. `ping` bypasses the pool and performs its own
/// open/query/close so a connection failure surfaces with its real cause
/// instead of a pool timeout.
pub struct PgStore {
    pool: PgPool,
    options: PgConnectOptions,
}

impl PgStore {
    /// Build a store from connection settings. Does not touch the network.
    pub fn connect(config: &Config) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options.clone());
        PgStore { pool, options }
    }

    /// Create the `logs` table when absent.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS logs (
                id         BIGSERIAL PRIMARY KEY,
                message    TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl LogStore for PgStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = PgConnection::connect_with(&self.options).await?;
        sqlx::query("SELECT 1").execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    async fn insert(&self, line: &str) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as("INSERT INTO logs (message) VALUES ($1) RETURNING id")
            .bind(line)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<LogEntry>, sqlx::Error> {
        sqlx::query_as("SELECT id, message, created_at FROM logs ORDER BY id DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }
}
