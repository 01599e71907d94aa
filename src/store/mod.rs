//! Pulseboard Document Store
//!
//! This module provides persistence for records:
//!
//! - **types**: `Record` and `NewRecord`
//! - **sqlite**: SQLite-backed JSON document store (default backend)
//! - **memory**: Process-local store for tests and throwaway runs
//! - **error**: Error types
//!
//! Backends are chosen by connection string:
//!
//! ```text
//! sqlite://./data/records.db   file-backed SQLite
//! sqlite://:memory:            SQLite in memory
//! memory://                    in-process store
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pulseboard::store::{open_store, NewRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = open_store("sqlite://./data/records.db")?;
//!
//!     let record = store.insert(NewRecord::new("sales", 100.0)).await?;
//!     println!("Created {}", record.id);
//!
//!     let all = store.list().await?;
//!     println!("{} records", all.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use types::{new_record_id, total_value, NewRecord, Record};

use async_trait::async_trait;
use std::sync::Arc;

/// Operations every record store backend supports
///
/// Records are listed in insertion order. There is no update operation.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, oldest first
    async fn list(&self) -> StoreResult<Vec<Record>>;

    /// Persist a new record and return it with its assigned id
    async fn insert(&self, record: NewRecord) -> StoreResult<Record>;

    /// Remove one record. Returns `false` when no record has this id.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Remove every record in a single bulk operation. Returns how many were removed.
    async fn delete_all(&self) -> StoreResult<u64>;

    /// Number of stored records
    async fn count(&self) -> StoreResult<u64>;

    /// Verify the backend is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;
}

/// Open a store from a connection string
pub fn open_store(url: &str) -> StoreResult<Arc<dyn RecordStore>> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        let store = if path == ":memory:" {
            SqliteStore::open_in_memory()?
        } else if path.is_empty() {
            return Err(StoreError::InvalidUrl(format!("{} (missing path)", url)));
        } else {
            SqliteStore::open(path)?
        };
        return Ok(Arc::new(store));
    }

    if url.starts_with("memory://") {
        return Ok(Arc::new(MemoryStore::new()));
    }

    Err(StoreError::InvalidUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_memory_store() {
        let store = open_store("memory://").unwrap();
        assert_eq!(store.backend(), "memory");
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_open_sqlite_in_memory() {
        let store = open_store("sqlite://:memory:").unwrap();
        assert_eq!(store.backend(), "sqlite");
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_open_sqlite_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("records.db");
        let url = format!("sqlite://{}", path.display());

        let store = open_store(&url).unwrap();
        store.insert(NewRecord::new("sales", 1.0)).await.unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_open_rejects_unknown_scheme() {
        let err = open_store("mongodb://localhost:27017/dashboard").err().unwrap();
        assert!(matches!(err, StoreError::InvalidUrl(_)));

        let err = open_store("sqlite://").err().unwrap();
        assert!(matches!(err, StoreError::InvalidUrl(_)));
    }
}
