// ==========================================
// Opsboard - Server Configuration
// ==========================================
// Responsibility: runtime settings from environment variables, with
// working defaults for local development.
// ==========================================

use std::path::PathBuf;
use tracing::warn;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to (OPSBOARD_BIND_ADDR)
    pub bind_addr: String,

    /// SQLite database file path (OPSBOARD_DB_PATH)
    pub db_path: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("OPSBOARD_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            db_path: std::env::var("OPSBOARD_DB_PATH").unwrap_or_else(|_| get_default_db_path()),
        }
    }
}

/// Default database location under the platform data directory.
pub fn get_default_db_path() -> String {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("opsboard");

    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!(error = %e, dir = %dir.display(), "could not create data directory");
    }

    dir.join("opsboard.db").to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_is_non_empty() {
        assert!(!get_default_db_path().is_empty());
    }
}
