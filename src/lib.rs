// ==========================================
// Opsboard - Tabular Upload Service
// ==========================================
// Ingests inventory and sales spreadsheets (CSV / XLSX / XLS) through
// two multipart upload endpoints, normalizes the messy headers and
// cells, and writes the surviving records to SQLite.
//
// Layers:
// - domain:     record types and the raw cell grid
// - ingest:     decode, header location, column mapping, record build
// - repository: DataStore trait and the SQLite implementation
// - api:        transport-agnostic upload API
// - app:        axum router, multipart handlers, shared state
// ==========================================

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod domain;
pub mod ingest;
pub mod logging;
pub mod repository;

/// Application name
pub const APP_NAME: &str = "opsboard";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
