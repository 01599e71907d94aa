//! SQLite Document Store
//!
//! Each record is one JSON document in the `documents` table. The
//! autoincrement `seq` column keeps insertion order for listing.
//!
//! The connection sits behind a `std::sync::Mutex` because
//! `rusqlite::Connection` is not `Sync`. No lock is held across an await.

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{NewRecord, Record};
use crate::store::RecordStore;
use async_trait::async_trait;
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed record store
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Create or open a store file
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Self::init(conn, Some(path))
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> StoreResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                body TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<Record>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT body FROM documents ORDER BY seq")?;

        let bodies = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        bodies
            .iter()
            .map(|body| serde_json::from_str(body).map_err(StoreError::from))
            .collect()
    }

    async fn insert(&self, record: NewRecord) -> StoreResult<Record> {
        let record = record.into_record();
        let body = serde_json::to_string(&record)?;

        self.conn()?.execute(
            "INSERT INTO documents (id, body) VALUES (?1, ?2)",
            params![record.id, body],
        )?;

        Ok(record)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self
            .conn()?
            .execute("DELETE FROM documents WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let removed = self.conn()?.execute("DELETE FROM documents", [])?;
        Ok(removed as u64)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.conn()?.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_insert_and_list_in_order() {
        let store = SqliteStore::open_in_memory().unwrap();

        let a = store.insert(NewRecord::new("sales", 100.0)).await.unwrap();
        let b = store.insert(NewRecord::new("costs", 40.0)).await.unwrap();
        let c = store.insert(NewRecord::new("sales", 100.0)).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records, vec![a.clone(), b, c.clone()]);
        // Identical payloads still produce distinct records
        assert_ne!(a.id, c.id);
    }

    #[tokio::test]
    async fn test_delete_one() {
        let store = SqliteStore::open_in_memory().unwrap();

        let a = store.insert(NewRecord::new("a", 1.0)).await.unwrap();
        let b = store.insert(NewRecord::new("b", 2.0)).await.unwrap();

        assert!(store.delete(&a.id).await.unwrap());
        assert!(!store.delete(&a.id).await.unwrap());
        assert!(!store.delete("no-such-id").await.unwrap());

        assert_eq!(store.list().await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.delete_all().await.unwrap(), 0);

        for i in 0..5 {
            store.insert(NewRecord::new("x", i as f64)).await.unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 5);
        assert_eq!(store.delete_all().await.unwrap(), 5);
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.db");

        let created = {
            let store = SqliteStore::open(&path).unwrap();
            store.insert(NewRecord::new("sales", 100.0)).await.unwrap()
        };

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
        assert_eq!(store.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn()
            .unwrap()
            .execute(
                "INSERT INTO documents (id, body) VALUES ('bad', 'not json')",
                [],
            )
            .unwrap();

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
