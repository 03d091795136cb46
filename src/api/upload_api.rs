// ==========================================
// Opsboard - Upload API
// ==========================================
// Responsibility: tie one upload together: ingest the bytes, hand
// the full record set to the DataStore as a single batch, report the
// outcome. No partial success: either the whole batch is submitted or
// the attempt is abandoned and the caller re-uploads.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::ingest::{ingest_inventory, ingest_sales};
use crate::repository::DataStore;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Response of a successful inventory upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryUploadResponse {
    /// Rows written to the store
    pub inserted: usize,
    /// Canonical header phrases detected in the upload
    pub headers_detected: Vec<String>,
}

/// Response of a successful sales upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesUploadResponse {
    /// Rows written to the store
    pub inserted: usize,
    /// Reporting period, echoed back
    pub period: String,
    pub status: String,
}

/// Upload API over any DataStore.
pub struct UploadApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> UploadApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Ingest an inventory upload and persist it as one batch.
    ///
    /// `location` is a free-text tag attached verbatim to every row.
    pub async fn upload_inventory(
        &self,
        file_name: &str,
        bytes: &[u8],
        location: Option<&str>,
    ) -> ApiResult<InventoryUploadResponse> {
        let upload_id = Uuid::new_v4();
        info!(
            upload_id = %upload_id,
            file_name = %file_name,
            size = bytes.len(),
            location = ?location,
            "inventory upload received"
        );

        let outcome = ingest_inventory(bytes, file_name, location)?;
        info!(
            upload_id = %upload_id,
            rows = outcome.records.len(),
            headers = ?outcome.headers_detected,
            "inventory upload parsed"
        );

        let inserted = self.store.insert_inventory_rows(outcome.records).await?;
        info!(upload_id = %upload_id, inserted, "inventory rows inserted");

        Ok(InventoryUploadResponse {
            inserted,
            headers_detected: outcome.headers_detected,
        })
    }

    /// Ingest a sales upload for one reporting period and persist it
    /// as one batch.
    pub async fn upload_sales(
        &self,
        file_name: &str,
        bytes: &[u8],
        period: &str,
    ) -> ApiResult<SalesUploadResponse> {
        if period.trim().is_empty() {
            return Err(ApiError::MissingRequiredField("period".to_string()));
        }

        let upload_id = Uuid::new_v4();
        info!(
            upload_id = %upload_id,
            file_name = %file_name,
            size = bytes.len(),
            period = %period,
            "sales upload received"
        );

        let outcome = ingest_sales(bytes, file_name, period)?;
        info!(
            upload_id = %upload_id,
            rows = outcome.records.len(),
            headers = ?outcome.headers_detected,
            "sales upload parsed"
        );

        let inserted = self.store.insert_sales_rows(outcome.records).await?;
        info!(upload_id = %upload_id, inserted, "sales rows inserted");

        Ok(SalesUploadResponse {
            inserted,
            period: period.to_string(),
            status: "success".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RepositoryError, RepositoryResult, SqliteDataStore};
    use crate::domain::{InventoryRecord, SalesRecord};
    use async_trait::async_trait;
    use tempfile::NamedTempFile;

    fn test_api() -> (NamedTempFile, UploadApi<SqliteDataStore>) {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        let store = SqliteDataStore::new(&path).unwrap();
        (temp, UploadApi::new(store))
    }

    #[tokio::test]
    async fn test_upload_inventory_csv() {
        let (_temp, api) = test_api();
        let bytes = b"Part,Description,On Hand,Available\nP-100,Citrus Oil,120,45\nP-200,Lye,8,$3\n";

        let response = api
            .upload_inventory("stock.csv", bytes, Some("Kapra"))
            .await
            .unwrap();

        assert_eq!(response.inserted, 2);
        assert!(response.headers_detected.contains(&"on hand".to_string()));
    }

    #[tokio::test]
    async fn test_upload_sales_csv() {
        let (_temp, api) = test_api();
        let bytes = b"Gross Sales By Product\nProduct,Qty,Sales\nSoap Bar,10,$120.00\n";

        let response = api.upload_sales("sales.csv", bytes, "2026-08").await.unwrap();

        assert_eq!(response.inserted, 1);
        assert_eq!(response.period, "2026-08");
        assert_eq!(response.status, "success");
    }

    #[tokio::test]
    async fn test_upload_sales_blank_period_rejected() {
        let (_temp, api) = test_api();
        let result = api.upload_sales("sales.csv", b"Product,Qty\n", "  ").await;

        match result {
            Err(ApiError::MissingRequiredField(field)) => assert_eq!(field, "period"),
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    struct FailingStore;

    #[async_trait]
    impl DataStore for FailingStore {
        async fn insert_inventory_rows(
            &self,
            _rows: Vec<InventoryRecord>,
        ) -> RepositoryResult<usize> {
            Err(RepositoryError::DatabaseQueryError("table is locked".to_string()))
        }

        async fn insert_sales_rows(&self, _rows: Vec<SalesRecord>) -> RepositoryResult<usize> {
            Err(RepositoryError::DatabaseQueryError("table is locked".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_verbatim_as_500() {
        let api = UploadApi::new(FailingStore);
        let bytes = b"Part,On Hand\nP-1,1\n";

        let err = api.upload_inventory("stock.csv", bytes, None).await.unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("table is locked"));
    }
}
