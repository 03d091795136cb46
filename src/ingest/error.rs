// ==========================================
// Opsboard - Ingestion Error Types
// ==========================================
// Tooling: thiserror derive macro
// All variants are terminal for the current upload attempt; nothing
// here is retried. The API layer maps each variant to an HTTP status.
// ==========================================

use thiserror::Error;

/// Ingestion pipeline error taxonomy.
#[derive(Error, Debug)]
pub enum IngestError {
    // ===== Caller-correctable input errors =====
    #[error("unsupported file type: {0} (expected .csv/.xlsx/.xls)")]
    UnsupportedFileType(String),

    #[error("no data rows found")]
    EmptyFile,

    #[error("could not locate header row (expected Product / Qty / Sales columns)")]
    HeaderNotFound,

    #[error("no valid sales records found; check that Product / Qty / Sales columns contain numeric data")]
    NoValidRecords,

    // ===== Decode failures =====
    #[error("CSV decode failed: {0}")]
    CsvDecode(String),

    #[error("spreadsheet decode failed: {0}")]
    SpreadsheetDecode(String),
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::CsvDecode(err.to_string())
    }
}

impl IngestError {
    /// Whether the caller can fix this by correcting the upload
    /// (HTTP 400) as opposed to an internal decode/parse failure
    /// (HTTP 500).
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            IngestError::UnsupportedFileType(_)
                | IngestError::EmptyFile
                | IngestError::HeaderNotFound
                | IngestError::NoValidRecords
        )
    }
}

/// Result alias for the ingestion pipeline.
pub type IngestResult<T> = Result<T, IngestError>;
