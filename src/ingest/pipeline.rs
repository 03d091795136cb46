// ==========================================
// Opsboard - Ingestion Pipeline
// ==========================================
// Responsibility: orchestrate one upload end to end:
// decode -> locate header -> map columns -> build records
// Short-circuits on the first failure; one bounded pass over an
// in-memory grid, request-scoped, no shared state.
// ==========================================

use crate::domain::{Cell, InventoryRecord, SalesRecord};
use crate::ingest::builder::{build_inventory_records, build_sales_records};
use crate::ingest::decoder::{decode, FileKind};
use crate::ingest::error::{IngestError, IngestResult};
use crate::ingest::header::{
    header_cells, locate_header, HeaderPolicy, INVENTORY_CSV_HEADER_ROW,
    INVENTORY_SHEET_HEADER_ROW,
};
use crate::ingest::mapper::{resolve_sales_columns, InventoryColumnMap};
use tracing::debug;

/// Successful pipeline output: the normalized records plus the
/// canonical headers that were detected, echoed to the caller for
/// diagnostics.
#[derive(Debug, Clone)]
pub struct IngestOutcome<T> {
    pub records: Vec<T>,
    pub headers_detected: Vec<String>,
}

/// Header policy for an inventory upload: spreadsheets follow the
/// report template with its 4-row title block, CSV exports start at
/// the header.
fn inventory_policy(kind: FileKind) -> HeaderPolicy {
    if kind.is_spreadsheet() {
        HeaderPolicy::FixedOffset {
            row: INVENTORY_SHEET_HEADER_ROW,
        }
    } else {
        HeaderPolicy::FixedOffset {
            row: INVENTORY_CSV_HEADER_ROW,
        }
    }
}

/// Ingest an inventory upload (fixed-offset layout).
///
/// Every non-blank data row yields a record; a file whose data region
/// is empty fails with [`IngestError::EmptyFile`].
pub fn ingest_inventory(
    bytes: &[u8],
    file_name: &str,
    location: Option<&str>,
) -> IngestResult<IngestOutcome<InventoryRecord>> {
    let kind = FileKind::from_file_name(file_name)
        .ok_or_else(|| IngestError::UnsupportedFileType(file_name.to_string()))?;

    let grid = decode(bytes, kind)?;
    if grid.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    // Fixed-offset location always succeeds
    let policy = inventory_policy(kind);
    let location_info = locate_header(&grid, policy).ok_or(IngestError::HeaderNotFound)?;
    let header = header_cells(&grid, &location_info);

    let map = InventoryColumnMap::from_header_row(header);
    debug!(headers = ?map.detected_headers(), "inventory header row mapped");

    let data_rows: &[Vec<Cell>] = if location_info.header_row + 1 < grid.len() {
        &grid[location_info.header_row + 1..]
    } else {
        &[]
    };

    let records = build_inventory_records(data_rows, &map, location, file_name);
    if records.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    Ok(IngestOutcome {
        headers_detected: map.detected_headers().to_vec(),
        records,
    })
}

/// Ingest a sales upload (heuristic-header layout).
///
/// Fails with [`IngestError::HeaderNotFound`] when no row carries the
/// header signature, and with [`IngestError::NoValidRecords`] when
/// every data row is filtered out. The two are kept distinct so the
/// caller can tell a missing column from unusable column contents.
pub fn ingest_sales(
    bytes: &[u8],
    file_name: &str,
    period: &str,
) -> IngestResult<IngestOutcome<SalesRecord>> {
    let kind = FileKind::from_file_name(file_name)
        .ok_or_else(|| IngestError::UnsupportedFileType(file_name.to_string()))?;

    let grid = decode(bytes, kind)?;
    if grid.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let location =
        locate_header(&grid, HeaderPolicy::Heuristic).ok_or(IngestError::HeaderNotFound)?;
    let header = header_cells(&grid, &location);

    let (columns, headers_detected) = resolve_sales_columns(header, location.first_column);
    debug!(
        header_row = location.header_row,
        first_column = location.first_column,
        headers = ?headers_detected,
        "sales header row located"
    );

    let records = build_sales_records(&grid[location.header_row + 1..], &location, &columns, period);
    if records.is_empty() {
        return Err(IngestError::NoValidRecords);
    }

    Ok(IngestOutcome {
        records,
        headers_detected,
    })
}
