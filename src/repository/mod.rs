// ==========================================
// Opsboard - Repository Layer
// ==========================================
// Responsibility: data access behind trait seams; no business rules.
// Constraint: all queries parameterized, writes transactional.
// ==========================================

pub mod data_store;
pub mod error;
pub mod sqlite_store;

// Re-export core types
pub use data_store::DataStore;
pub use error::{RepositoryError, RepositoryResult};
pub use sqlite_store::SqliteDataStore;
