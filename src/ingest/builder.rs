// ==========================================
// Opsboard - Record Builder
// ==========================================
// Responsibility: walk data rows, apply the column map, coerce each
// field through the cell normalizer, and produce one domain record
// per row. The inventory variant keeps every non-blank row (full
// snapshot per part); the sales variant filters noise rows from
// exported reports.
// ==========================================

use crate::domain::{Cell, InventoryRecord, SalesRecord};
use crate::ingest::cell::{coerce_number, NUMERIC_DEFAULT};
use crate::ingest::header::HeaderLocation;
use crate::ingest::mapper::{InventoryColumnMap, SalesColumns};

/// Case-insensitive prefix of barcode continuation lines. Such rows
/// share the product column with real rows but carry a UPC code, not
/// a product; blanking the product makes the survival filter drop
/// them.
pub const UPC_CONTINUATION_PREFIX: &str = "upc";

pub fn is_upc_continuation(product: &str) -> bool {
    product
        .get(..UPC_CONTINUATION_PREFIX.len())
        .map_or(false, |p| p.eq_ignore_ascii_case(UPC_CONTINUATION_PREFIX))
}

// ==========================================
// Inventory (fixed-offset) builder
// ==========================================

/// Build one InventoryRecord per data row.
///
/// Malformed rows are never dropped: missing or unparsable fields
/// fall back to absent text / zero quantities and the record is still
/// emitted. Only rows whose cells are all empty are skipped (the
/// source decoders never surfaced blank rows).
pub fn build_inventory_records(
    data_rows: &[Vec<Cell>],
    map: &InventoryColumnMap,
    location: Option<&str>,
    file_name: &str,
) -> Vec<InventoryRecord> {
    data_rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .map(|row| {
            let cell = |column: Option<usize>| -> Cell {
                column
                    .and_then(|index| row.get(index))
                    .cloned()
                    .unwrap_or(Cell::Empty)
            };
            let text = |column: Option<usize>| -> Option<String> {
                let value = cell(column).to_text();
                if value.is_empty() {
                    None
                } else {
                    Some(value)
                }
            };
            let quantity = |phrase: &str| coerce_number(&cell(map.column(phrase)));

            InventoryRecord {
                part: text(map.part_column()),
                description: text(map.column("description")),
                uom: text(map.column("uom")),
                on_hand: quantity("on hand"),
                allocated: quantity("allocated"),
                not_available: quantity("not available"),
                drop_ship: quantity("drop ship"),
                available: quantity("available"),
                on_order: quantity("on order"),
                committed: quantity("committed"),
                short: quantity("short"),
                location: location.map(str::to_string),
                source_file_name: file_name.to_string(),
            }
        })
        .collect()
}

// ==========================================
// Sales (heuristic) builder
// ==========================================

/// Build SalesRecords from the data rows following the located
/// header.
///
/// Rows are sliced at the header's first real column, filled from the
/// resolved columns, UPC continuation rows get their product blanked,
/// and a record survives iff product is non-empty AND (qty > 0 OR
/// sales > 0).
pub fn build_sales_records(
    data_rows: &[Vec<Cell>],
    location: &HeaderLocation,
    columns: &SalesColumns,
    period: &str,
) -> Vec<SalesRecord> {
    data_rows
        .iter()
        .filter_map(|row| {
            let row = &row[location.first_column.min(row.len())..];
            let value = |column: Option<usize>| -> &Cell {
                column.and_then(|index| row.get(index)).unwrap_or(&Cell::Empty)
            };

            let mut record = SalesRecord {
                product: value(columns.product).to_text().trim().to_string(),
                qty: coerce_number(value(columns.qty)),
                sales: coerce_number(value(columns.sales)),
                period: period.to_string(),
            };

            if is_upc_continuation(&record.product) {
                record.product.clear();
            }

            if !record.product.is_empty() && (record.qty > 0.0 || record.sales > 0.0) {
                Some(record)
            } else {
                None
            }
        })
        .collect()
}
