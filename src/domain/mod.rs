// ==========================================
// Opsboard - Domain Layer
// ==========================================
// Responsibility: value types shared across the ingestion pipeline,
// the repository layer and the upload API. No behavior beyond
// construction and cell access.
// ==========================================

pub mod grid;
pub mod inventory;
pub mod sales;

// Re-export core types
pub use grid::{Cell, RawGrid};
pub use inventory::InventoryRecord;
pub use sales::SalesRecord;
