// ==========================================
// Opsboard - Header Locator
// ==========================================
// Responsibility: find the row that acts as the column header in a
// decoded grid. Two policies, selected by source layout:
// - fixed offset: inventory reports carry a known title block, the
//   header row sits at a configured row index
// - heuristic search: sales exports place the header at a varying
//   row, so it is found by content signature
// ==========================================

use crate::domain::{Cell, RawGrid};
use crate::ingest::cell::normalize_header_token;

/// Header row index of the inventory spreadsheet template
/// (zero-based; the template has a 4-row title block).
pub const INVENTORY_SHEET_HEADER_ROW: usize = 4;

/// Inventory CSV exports carry no title block; the header is row 0.
pub const INVENTORY_CSV_HEADER_ROW: usize = 0;

/// Title marker of the sales report export. A decorative title row
/// like "Gross Sales By Product" would otherwise satisfy the header
/// signature, so any row whose joined tokens contain this marker is
/// never selected.
pub const SALES_TITLE_MARKER: &str = "grosssalesbyproduct";

/// Header-row location strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Header row is always at a fixed row offset. No search is
    /// performed; a grid shorter than the offset simply yields no
    /// headers and downstream mapping treats every field as absent.
    FixedOffset { row: usize },

    /// Scan rows from the top for the sales header signature.
    Heuristic,
}

/// Located header row, plus the first column that carries a real
/// header (leading decorative blank columns are trimmed from the
/// header row and every data row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    pub header_row: usize,
    pub first_column: usize,
}

/// Header signature of the sales export: at least one cell token
/// containing "product" AND at least one containing "qty"/"quantity"
/// or "sales". The report title line is exempt.
pub fn is_sales_header_row(row: &[Cell]) -> bool {
    let tokens: Vec<String> = row.iter().map(normalize_header_token).collect();

    if tokens.concat().contains(SALES_TITLE_MARKER) {
        return false;
    }

    let has_product = tokens.iter().any(|t| t.contains("product"));
    let has_qty = tokens
        .iter()
        .any(|t| t.contains("qty") || t.contains("quantity"));
    let has_sales = tokens.iter().any(|t| t.contains("sales"));

    has_product && (has_qty || has_sales)
}

/// Locate the header row under the given policy.
///
/// `None` only ever means "heuristic search exhausted all rows"; the
/// fixed-offset policy always yields a location (possibly past the
/// end of a short grid).
pub fn locate_header(grid: &RawGrid, policy: HeaderPolicy) -> Option<HeaderLocation> {
    match policy {
        HeaderPolicy::FixedOffset { row } => Some(HeaderLocation {
            header_row: row,
            first_column: 0,
        }),
        HeaderPolicy::Heuristic => {
            let header_row = grid.iter().position(|row| is_sales_header_row(row))?;
            let first_column = grid[header_row]
                .iter()
                .position(|cell| !normalize_header_token(cell).is_empty())
                .unwrap_or(0);
            Some(HeaderLocation {
                header_row,
                first_column,
            })
        }
    }
}

/// Header row cells at a location, or an empty slice when the grid is
/// shorter than the configured offset.
pub fn header_cells<'a>(grid: &'a RawGrid, location: &HeaderLocation) -> &'a [Cell] {
    grid.get(location.header_row)
        .map(|row| row.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from(*s)).collect()
    }

    #[test]
    fn test_header_signature_matches() {
        assert!(is_sales_header_row(&row(&["Product", "Qty", "Sales"])));
        assert!(is_sales_header_row(&row(&["Product Name", "Quantity Shipped"])));
        assert!(is_sales_header_row(&row(&["", "Product", "Gross Sales"])));
    }

    #[test]
    fn test_header_signature_requires_both_signals() {
        assert!(!is_sales_header_row(&row(&["Product"])));
        assert!(!is_sales_header_row(&row(&["Qty", "Sales"])));
        assert!(!is_sales_header_row(&row(&["Description", "Amount"])));
    }

    #[test]
    fn test_title_row_never_selected() {
        // Carries both signals, but is the report title line
        assert!(!is_sales_header_row(&row(&["Gross Sales By Product", "Qty"])));
        // Marker split across cells still excludes (tokens are joined)
        assert!(!is_sales_header_row(&row(&["Gross Sales", "By Product", "Qty"])));
    }

    #[test]
    fn test_locate_heuristic_skips_title() {
        let grid = vec![
            row(&["Gross Sales By Product", "Qty"]),
            row(&["Product", "Qty", "Sales"]),
        ];
        let loc = locate_header(&grid, HeaderPolicy::Heuristic).unwrap();
        assert_eq!(loc.header_row, 1);
        assert_eq!(loc.first_column, 0);
    }

    #[test]
    fn test_locate_heuristic_trims_leading_blank_columns() {
        let grid = vec![row(&["", "", "Product", "Qty"])];
        let loc = locate_header(&grid, HeaderPolicy::Heuristic).unwrap();
        assert_eq!(loc.first_column, 2);
    }

    #[test]
    fn test_locate_heuristic_exhausted() {
        let grid = vec![row(&["Description", "Amount"]), row(&["Widget", "10"])];
        assert_eq!(locate_header(&grid, HeaderPolicy::Heuristic), None);
    }

    #[test]
    fn test_locate_fixed_offset_past_grid_end() {
        let grid = vec![row(&["only row"])];
        let loc = locate_header(&grid, HeaderPolicy::FixedOffset { row: 4 }).unwrap();
        assert_eq!(loc.header_row, 4);
        assert!(header_cells(&grid, &loc).is_empty());
    }
}
