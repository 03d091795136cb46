// ==========================================
// Opsboard - Sales Domain Types
// ==========================================
// Responsibility: the normalized sales row produced by the
// heuristic-header ingestion pipeline.
// ==========================================

use serde::{Deserialize, Serialize};

/// One normalized sales row.
///
/// A record only survives the builder when `product` is non-empty and
/// at least one of `qty`/`sales` is strictly positive; subtotal and
/// barcode continuation rows from exported reports never reach the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Product name, trimmed, non-empty
    pub product: String,

    /// Quantity sold
    pub qty: f64,

    /// Sales amount
    pub sales: f64,

    /// Caller-supplied reporting period
    pub period: String,
}
