// ==========================================
// Opsboard - Inventory Domain Types
// ==========================================
// Responsibility: the normalized inventory row produced by the
// fixed-offset ingestion pipeline. Constructed once per source row,
// immutable, handed to the DataStore as one batch.
// ==========================================

use serde::{Deserialize, Serialize};

/// One normalized inventory row.
///
/// Text fields are `None` when the source column is missing or the
/// cell is empty. Quantity fields default to 0 when missing or
/// unparsable; an all-zero record is still a valid snapshot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Part identifier
    pub part: Option<String>,

    /// Part description
    pub description: Option<String>,

    /// Unit of measure
    pub uom: Option<String>,

    // Quantity columns of the inventory report template
    pub on_hand: f64,
    pub allocated: f64,
    pub not_available: f64,
    pub drop_ship: f64,
    pub available: f64,
    pub on_order: f64,
    pub committed: f64,
    pub short: f64,

    /// Caller-supplied location tag, attached verbatim
    pub location: Option<String>,

    /// Name of the uploaded file this row came from
    pub source_file_name: String,
}
