// ==========================================
// Opsboard - Application Layer
// ==========================================
// Responsibility: shared state and the axum HTTP surface.
// ==========================================

pub mod http;
pub mod state;

// Re-export core types
pub use http::router;
pub use state::AppState;
