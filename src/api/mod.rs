// ==========================================
// Opsboard - API Layer
// ==========================================
// Responsibility: business API surface the HTTP handlers call.
// Transport-agnostic: nothing here knows about multipart or axum.
// ==========================================

pub mod error;
pub mod upload_api;

// Re-export core types
pub use error::{ApiError, ApiResult};
pub use upload_api::{InventoryUploadResponse, SalesUploadResponse, UploadApi};
