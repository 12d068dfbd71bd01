//! Environment-derived configuration.
//!
//! All knobs are read once at startup into an explicit [`Config`] that is
//! passed to whatever needs it, instead of consulting process environment
//! from request paths.

use std::path::PathBuf;
use tracing::warn;

/// Runtime configuration, one instance per process.
#[derive(Debug, Clone)]
pub struct Config {
  /// Address the HTTP server binds to.
  pub bind_addr: String,
  /// Path of the append-only mirror file.
  pub log_file: PathBuf,
  pub db_host: String,
  pub db_port: u16,
  pub db_name: String,
  pub db_user: String,
  pub db_password: String,
}

impl Config {
  /// Read configuration from process environment, with Compose-friendly
  /// defaults.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
    let db_port = match var("DB_PORT") {
      Some(raw) => raw.parse().unwrap_or_else(|_| {
        warn!("DB_PORT {raw:?} is not a port number, using 5432");
        5432
      }),
      None => 5432,
    };

    Config {
      bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string()),
      log_file: var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/logs/logs.txt")),
      db_host: var("DB_HOST").unwrap_or_else(|| "db".to_string()),
      db_port,
      db_name: var("DB_NAME").unwrap_or_else(|| "loggerdb".to_string()),
      db_user: var("DB_USER").unwrap_or_else(|| "loggeruser".to_string()),
      db_password: var("DB_PASSWORD").unwrap_or_default(),
    }
  }
}
