// ==========================================
// Opsboard - Ingestion Layer
// ==========================================
// Responsibility: turn uploaded spreadsheet/CSV bytes into normalized
// domain records.
// Pipeline: decode -> locate header -> map columns -> build records
// ==========================================

pub mod builder;
pub mod cell;
pub mod decoder;
pub mod error;
pub mod header;
pub mod mapper;
pub mod pipeline;

// Re-export core types
pub use cell::{coerce_number, normalize_header_phrase, normalize_header_token, NUMERIC_DEFAULT};
pub use decoder::FileKind;
pub use error::{IngestError, IngestResult};
pub use header::{HeaderLocation, HeaderPolicy};
pub use mapper::{InventoryColumnMap, SalesColumns};
pub use pipeline::{ingest_inventory, ingest_sales, IngestOutcome};
