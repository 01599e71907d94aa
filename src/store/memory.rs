//! In-memory record store
//!
//! Keeps records in a `Vec` behind a tokio `RwLock`. Nothing survives
//! the process.

use crate::store::error::StoreResult;
use crate::store::types::{NewRecord, Record};
use crate::store::RecordStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local record store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, record: NewRecord) -> StoreResult<Record> {
        let record = record.into_record();
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id == id) {
            Some(idx) => {
                records.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut records = self.records.write().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
