// ==========================================
// Opsboard - Application State
// ==========================================
// Responsibility: application-level shared state handed to the HTTP
// handlers.
// ==========================================

use crate::api::UploadApi;
use crate::repository::SqliteDataStore;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    /// Database path the store was opened at
    pub db_path: String,

    /// Upload API over the SQLite store
    pub upload_api: Arc<UploadApi<SqliteDataStore>>,
}

impl AppState {
    pub fn new(db_path: &str) -> anyhow::Result<Self> {
        let store = SqliteDataStore::new(db_path)?;

        Ok(Self {
            db_path: db_path.to_string(),
            upload_api: Arc::new(UploadApi::new(store)),
        })
    }
}
