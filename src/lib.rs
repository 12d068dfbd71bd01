//! logtee library entrypoint.
//!
//! Modules:
//! - `app`: startup and shared state
//! - `config`: environment-derived configuration
//! - `http`: Axum router and handlers
//! - `store`: durable log store (PostgreSQL, plus an in-memory stand-in)
//! - `file_log`: append-only mirror file
//! - `models`: typed records used across layers
//! - `util`: tracing setup and timestamp helpers

pub mod app;
pub mod config;
pub mod file_log;
pub mod http;
pub mod models;
pub mod store;
pub mod util;
