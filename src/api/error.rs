// ==========================================
// Opsboard - API Layer Error Types
// ==========================================
// Responsibility: the error surface the HTTP layer maps to status
// codes. Every message is short and human-readable; 400 means the
// caller can fix the upload, 500 means they cannot.
// ==========================================

use crate::ingest::IngestError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API layer error taxonomy.
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Caller-correctable (HTTP 400) =====
    #[error("no file uploaded")]
    MissingFile,

    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    // ===== Infrastructure (HTTP 500) =====
    #[error("store write failed: {0}")]
    StoreWriteFailure(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::StoreWriteFailure(err.to_string())
    }
}

impl ApiError {
    /// HTTP status this error maps to. Decode failures inside the
    /// ingest taxonomy are internal (500); the rest of it is caller
    /// input (400).
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingFile
            | ApiError::MissingRequiredField(_)
            | ApiError::InvalidRequest(_) => 400,
            ApiError::Ingest(err) if err.is_caller_error() => 400,
            _ => 500,
        }
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
