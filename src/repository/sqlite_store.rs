// ==========================================
// Opsboard - SQLite DataStore Implementation
// ==========================================
// Responsibility: append-only persistence of normalized upload rows.
// All writes are parameterized and transactional: one transaction per
// uploaded file, never row-by-row.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{InventoryRecord, SalesRecord};
use crate::repository::data_store::DataStore;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// SqliteDataStore
// ==========================================
pub struct SqliteDataStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDataStore {
    /// Open (or create) the store at `db_path` and ensure the upload
    /// tables exist.
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn init_schema(conn: &Connection) -> RepositoryResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS inventory_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                part TEXT,
                description TEXT,
                uom TEXT,
                on_hand REAL NOT NULL DEFAULT 0,
                allocated REAL NOT NULL DEFAULT 0,
                not_available REAL NOT NULL DEFAULT 0,
                drop_ship REAL NOT NULL DEFAULT 0,
                available REAL NOT NULL DEFAULT 0,
                on_order REAL NOT NULL DEFAULT 0,
                committed REAL NOT NULL DEFAULT 0,
                short REAL NOT NULL DEFAULT 0,
                location TEXT,
                source_file_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sales_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product TEXT NOT NULL,
                qty REAL NOT NULL DEFAULT 0,
                sales REAL NOT NULL DEFAULT 0,
                period TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

#[async_trait]
impl DataStore for SqliteDataStore {
    async fn insert_inventory_rows(&self, rows: Vec<InventoryRecord>) -> RepositoryResult<usize> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let created_at = Utc::now();
        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO inventory_data (
                    part, description, uom,
                    on_hand, allocated, not_available, drop_ship,
                    available, on_order, committed, short,
                    location, source_file_name, created_at
                ) VALUES (
                    ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14
                )
                "#,
            )?;

            for row in &rows {
                stmt.execute(params![
                    row.part,
                    row.description,
                    row.uom,
                    row.on_hand,
                    row.allocated,
                    row.not_available,
                    row.drop_ship,
                    row.available,
                    row.on_order,
                    row.committed,
                    row.short,
                    row.location,
                    row.source_file_name,
                    created_at,
                ])?;
                count += 1;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(count)
    }

    async fn insert_sales_rows(&self, rows: Vec<SalesRecord>) -> RepositoryResult<usize> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let created_at = Utc::now();
        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO sales_data (product, qty, sales, period, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;

            for row in &rows {
                stmt.execute(params![
                    row.product,
                    row.qty,
                    row.sales,
                    row.period,
                    created_at,
                ])?;
                count += 1;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn test_store() -> (NamedTempFile, SqliteDataStore) {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        let store = SqliteDataStore::new(&path).unwrap();
        (temp, store)
    }

    fn sample_inventory(part: &str) -> InventoryRecord {
        InventoryRecord {
            part: Some(part.to_string()),
            description: None,
            uom: None,
            on_hand: 1.0,
            allocated: 0.0,
            not_available: 0.0,
            drop_ship: 0.0,
            available: 1.0,
            on_order: 0.0,
            committed: 0.0,
            short: 0.0,
            location: Some("Kapra".to_string()),
            source_file_name: "stock.csv".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_inventory_batch() {
        let (_temp, store) = test_store();

        let inserted = store
            .insert_inventory_rows(vec![sample_inventory("P-1"), sample_inventory("P-2")])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let conn = store.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM inventory_data", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_insert_sales_batch() {
        let (_temp, store) = test_store();

        let rows = vec![SalesRecord {
            product: "Soap".to_string(),
            qty: 10.0,
            sales: 120.0,
            period: "2026-08".to_string(),
        }];
        let inserted = store.insert_sales_rows(rows).await.unwrap();
        assert_eq!(inserted, 1);

        let conn = store.conn.lock().unwrap();
        let (product, period): (String, String) = conn
            .query_row("SELECT product, period FROM sales_data", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(product, "Soap");
        assert_eq!(period, "2026-08");
    }

    #[tokio::test]
    async fn test_insert_empty_batch() {
        let (_temp, store) = test_store();
        let inserted = store.insert_inventory_rows(vec![]).await.unwrap();
        assert_eq!(inserted, 0);
    }
}
