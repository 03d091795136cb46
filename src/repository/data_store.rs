// ==========================================
// Opsboard - DataStore Trait
// ==========================================
// Responsibility: define the persistence interface the upload API
// hands normalized records to. No business rules here, only batch
// appends.
// ==========================================

use crate::domain::{InventoryRecord, SalesRecord};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// DataStore Trait
// ==========================================
// Implementors: SqliteDataStore
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Insert one upload's inventory rows as a single batch.
    ///
    /// All-or-nothing: either every row is written in one transaction
    /// or the store's error is surfaced unchanged. Returns the number
    /// of rows written.
    async fn insert_inventory_rows(&self, rows: Vec<InventoryRecord>) -> RepositoryResult<usize>;

    /// Insert one upload's sales rows as a single batch.
    ///
    /// Same all-or-nothing semantics as inventory.
    async fn insert_sales_rows(&self, rows: Vec<SalesRecord>) -> RepositoryResult<usize>;
}
