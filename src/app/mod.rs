//! Application setup and runtime.

use crate::config::Config;
use crate::file_log::FileLog;
use crate::http;
use crate::store::{LogStore, PgStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn LogStore>,
  pub file_log: FileLog,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let config = Config::from_env();
  info!(
    "config: bind={}, db={}@{}:{}/{}, mirror={}",
    config.bind_addr,
    config.db_user,
    config.db_host,
    config.db_port,
    config.db_name,
    config.log_file.display()
  );

  let store = PgStore::connect(&config);
  // Best-effort: the Compose setup also provisions the table out-of-band,
  // and the pool itself connects lazily.
  if let Err(e) = store.ensure_schema().await {
    warn!("schema bootstrap skipped (database unreachable?): {e}");
  }

  let state = AppState {
    store: Arc::new(store),
    file_log: FileLog::new(&config.log_file),
  };

  let app = http::build_router(state);

  let addr: SocketAddr = config.bind_addr.parse()?;
  info!("listening on http://{}", addr);
  info!("submit a message:  POST http://{}/log", addr);
  info!("recent entries:    GET  http://{}/recent", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
