//! Utility functions: tracing setup and wall-clock stamps.

use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Local wall-clock time rendered as `YYYY-MM-DD HH:MM:SS.ffffff`.
///
/// This is the stamp embedded in every `[<stamp>] <message>` line, computed
/// once per submission and shared by the database row and the mirror file.
pub fn wall_clock_stamp() -> String {
  Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
