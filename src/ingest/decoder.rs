// ==========================================
// Opsboard - Upload Decoder
// ==========================================
// Responsibility: file-kind detection and decoding of uploaded bytes
// into a RawGrid.
// Supported: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================
// Uploads arrive as in-memory multipart bodies, so decoding reads
// from byte slices, never from the filesystem.
// ==========================================

use crate::domain::{Cell, RawGrid};
use crate::ingest::error::{IngestError, IngestResult};
use calamine::{Data, Range, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::io::Cursor;

/// Upload format, resolved from the uploaded file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
    Xls,
}

impl FileKind {
    /// Resolve the format from the file name extension,
    /// case-insensitive. `None` means unsupported.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Some(FileKind::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(FileKind::Xlsx)
        } else if lower.ends_with(".xls") {
            Some(FileKind::Xls)
        } else {
            None
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, FileKind::Xlsx | FileKind::Xls)
    }
}

/// Decode uploaded bytes into a RawGrid.
pub fn decode(bytes: &[u8], kind: FileKind) -> IngestResult<RawGrid> {
    match kind {
        FileKind::Csv => decode_csv(bytes),
        FileKind::Xlsx => {
            let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
                .map_err(|e| IngestError::SpreadsheetDecode(e.to_string()))?;
            decode_workbook(workbook)
        }
        FileKind::Xls => {
            let workbook: Xls<_> = Xls::new(Cursor::new(bytes))
                .map_err(|e| IngestError::SpreadsheetDecode(e.to_string()))?;
            decode_workbook(workbook)
        }
    }
}

fn decode_csv(bytes: &[u8]) -> IngestResult<RawGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // tolerate ragged row lengths
        .from_reader(bytes);

    let mut grid = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<Cell> = record.iter().map(Cell::from).collect();
        grid.push(row);
    }

    Ok(grid)
}

/// Read the first sheet of a workbook into a RawGrid.
fn decode_workbook<RS, R>(mut workbook: R) -> IngestResult<RawGrid>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(IngestError::SpreadsheetDecode(
            "workbook has no sheets".to_string(),
        ));
    }

    let sheet_name = sheet_names[0].clone();
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::SpreadsheetDecode(e.to_string()))?;

    Ok(grid_from_range(&range))
}

fn grid_from_range(range: &Range<Data>) -> RawGrid {
    range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect()
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from(s.as_str()),
        Data::Error(_) => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_name() {
        assert_eq!(FileKind::from_file_name("report.csv"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_file_name("Report.XLSX"), Some(FileKind::Xlsx));
        assert_eq!(FileKind::from_file_name("legacy.xls"), Some(FileKind::Xls));
        assert_eq!(FileKind::from_file_name("notes.txt"), None);
        assert_eq!(FileKind::from_file_name("csv"), None);
    }

    #[test]
    fn test_decode_csv_basic() {
        let bytes = b"Part,Qty\nP-100,12\nP-200,\n";
        let grid = decode(bytes, FileKind::Csv).unwrap();

        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0][0], Cell::Text("Part".to_string()));
        assert_eq!(grid[1][1], Cell::Text("12".to_string()));
        assert_eq!(grid[2][1], Cell::Empty);
    }

    #[test]
    fn test_decode_csv_ragged_rows() {
        let bytes = b"Title Only\nProduct,Qty,Sales\nSoap,1,2\n";
        let grid = decode(bytes, FileKind::Csv).unwrap();

        assert_eq!(grid[0].len(), 1);
        assert_eq!(grid[1].len(), 3);
    }

    #[test]
    fn test_decode_empty_csv() {
        let grid = decode(b"", FileKind::Csv).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_decode_garbage_xlsx_fails() {
        let result = decode(b"not a zip archive", FileKind::Xlsx);
        assert!(matches!(result, Err(IngestError::SpreadsheetDecode(_))));
    }
}
