// ==========================================
// Opsboard - Column Mapper
// ==========================================
// Responsibility: build the lookup from canonical field name to
// source column position, tolerant of header spelling and ordering
// variance. One strategy per layout:
// - inventory: exact canonical phrase -> column index
// - sales: per-column fuzzy token, first matching column per field
// ==========================================

use crate::domain::Cell;
use crate::ingest::cell::{normalize_header_phrase, normalize_header_token};
use std::collections::HashMap;

/// Raw header spelling some inventory exports use for the part column
/// when the canonical "part" phrase is absent.
pub const PART_HEADER_FALLBACK: &str = "Part";

// ==========================================
// Inventory (fixed-offset) column map
// ==========================================

/// Lookup from canonical header phrase to column index, built once
/// per uploaded inventory file.
///
/// A later column with the same canonical phrase overwrites an
/// earlier one, matching the original report mapping. A field absent
/// from the source maps to "not found" rather than failing; the
/// builder applies defaults downstream.
pub struct InventoryColumnMap {
    columns: HashMap<String, usize>,
    detected: Vec<String>,
    part_fallback_column: Option<usize>,
}

impl InventoryColumnMap {
    pub fn from_header_row(header: &[Cell]) -> Self {
        let mut columns = HashMap::new();
        let mut detected = Vec::new();

        for (index, cell) in header.iter().enumerate() {
            let phrase = normalize_header_phrase(cell);
            if phrase.is_empty() {
                continue;
            }
            if !columns.contains_key(&phrase) {
                detected.push(phrase.clone());
            }
            columns.insert(phrase, index);
        }

        let part_fallback_column = header
            .iter()
            .position(|cell| cell.to_text().trim() == PART_HEADER_FALLBACK);

        Self {
            columns,
            detected,
            part_fallback_column,
        }
    }

    /// Column index for a canonical phrase, or `None` when absent.
    pub fn column(&self, phrase: &str) -> Option<usize> {
        self.columns.get(phrase).copied()
    }

    /// Part column: canonical phrase first, then the literal raw
    /// header spelling, then not found.
    pub fn part_column(&self) -> Option<usize> {
        self.column("part").or(self.part_fallback_column)
    }

    /// Canonical phrases seen in the header row, in column order,
    /// echoed to the caller for diagnostics.
    pub fn detected_headers(&self) -> &[String] {
        &self.detected
    }
}

// ==========================================
// Sales (heuristic) column resolution
// ==========================================

/// Semantic role a sales header column can play.
///
/// Classification precedence mirrors the report layout: a column
/// mentioning "product" is the product column even if its token also
/// contains a quantity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Product,
    Quantity,
    Sales,
}

/// Classify a normalized column token, `None` when the column carries
/// no recognized signal.
pub fn classify_column(token: &str) -> Option<ColumnRole> {
    if token.contains("product") {
        Some(ColumnRole::Product)
    } else if token.contains("qty") || token.contains("quantity") {
        Some(ColumnRole::Quantity)
    } else if token.contains("sale") {
        Some(ColumnRole::Sales)
    } else {
        None
    }
}

/// Resolved source columns for the sales record fields. Indices are
/// relative to the trimmed header (after leading blank columns).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesColumns {
    pub product: Option<usize>,
    pub qty: Option<usize>,
    pub sales: Option<usize>,
}

/// Resolve sales columns from the header row: for each field, the
/// first column with a matching signal wins and later columns with
/// the same signal are ignored. Also returns the non-empty normalized
/// tokens for caller diagnostics.
pub fn resolve_sales_columns(header: &[Cell], first_column: usize) -> (SalesColumns, Vec<String>) {
    let start = first_column.min(header.len());
    let tokens: Vec<String> = header[start..].iter().map(normalize_header_token).collect();

    let mut columns = SalesColumns::default();
    for (index, token) in tokens.iter().enumerate() {
        match classify_column(token) {
            Some(ColumnRole::Product) => {
                columns.product.get_or_insert(index);
            }
            Some(ColumnRole::Quantity) => {
                columns.qty.get_or_insert(index);
            }
            Some(ColumnRole::Sales) => {
                columns.sales.get_or_insert(index);
            }
            None => {}
        }
    }

    let detected = tokens.into_iter().filter(|t| !t.is_empty()).collect();
    (columns, detected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from(*s)).collect()
    }

    #[test]
    fn test_inventory_map_phrase_lookup() {
        let cells = header(&["Part", "Description", "UOM", "On\nHand", "Allocated"]);
        let map = InventoryColumnMap::from_header_row(&cells);

        assert_eq!(map.column("part"), Some(0));
        assert_eq!(map.column("on hand"), Some(3));
        assert_eq!(map.column("committed"), None);
    }

    #[test]
    fn test_inventory_map_duplicate_phrase_last_wins() {
        let cells = header(&["Available", "Part", "Available"]);
        let map = InventoryColumnMap::from_header_row(&cells);
        assert_eq!(map.column("available"), Some(2));
    }

    #[test]
    fn test_inventory_part_raw_fallback() {
        // Canonical phrase lookup misses only when the phrase map has
        // no "part" key; a raw "Part" header still resolves
        let cells = header(&["Part ", "Description"]);
        let map = InventoryColumnMap::from_header_row(&cells);
        assert_eq!(map.part_column(), Some(0));

        let cells = header(&["Description", "UOM"]);
        let map = InventoryColumnMap::from_header_row(&cells);
        assert_eq!(map.part_column(), None);
    }

    #[test]
    fn test_inventory_detected_headers_in_column_order() {
        let cells = header(&["Part", "", "On Hand", "Available"]);
        let map = InventoryColumnMap::from_header_row(&cells);
        assert_eq!(map.detected_headers(), &["part", "on hand", "available"]);
    }

    #[test]
    fn test_classify_column_precedence() {
        assert_eq!(classify_column("productqty"), Some(ColumnRole::Product));
        assert_eq!(classify_column("qtyshipped"), Some(ColumnRole::Quantity));
        assert_eq!(classify_column("grosssales"), Some(ColumnRole::Sales));
        assert_eq!(classify_column("period"), None);
    }

    #[test]
    fn test_resolve_sales_columns_first_match_wins() {
        let cells = header(&["Product", "Qty Ordered", "Qty Shipped", "Sales"]);
        let (columns, _) = resolve_sales_columns(&cells, 0);

        assert_eq!(columns.product, Some(0));
        assert_eq!(columns.qty, Some(1));
        assert_eq!(columns.sales, Some(3));
    }

    #[test]
    fn test_resolve_sales_columns_relative_to_trim() {
        let cells = header(&["", "Product", "Qty"]);
        let (columns, detected) = resolve_sales_columns(&cells, 1);

        assert_eq!(columns.product, Some(0));
        assert_eq!(columns.qty, Some(1));
        assert_eq!(detected, vec!["product", "qty"]);
    }

    #[test]
    fn test_resolve_sales_columns_missing_field() {
        let cells = header(&["Product", "Sales"]);
        let (columns, _) = resolve_sales_columns(&cells, 0);
        assert_eq!(columns.qty, None);
    }
}
