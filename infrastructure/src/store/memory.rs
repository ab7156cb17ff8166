//! Process-local record store

use super::index::RecordIndex;
use async_trait::async_trait;
use chrono::Utc;
use mission_application::{NewRecord, RecordFilter, RecordStore, StoreError, StoredRecord};
use std::sync::Mutex;
use tracing::debug;

/// Record store backed by a `Mutex`-guarded vector.
///
/// Records are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    index: Mutex<RecordIndex>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, RecordIndex>, StoreError> {
        self.index
            .lock()
            .map_err(|_| StoreError::Unavailable("record index lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create(&self, record: NewRecord) -> Result<StoredRecord, StoreError> {
        let stored = self.lock()?.insert(record, Utc::now())?;
        debug!(id = %stored.id, kind = stored.kind.as_str(), "Record created");
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self.lock()?.list(filter))
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<StoredRecord, StoreError> {
        let mut index = self.lock()?;
        let updated = index.with_status(id, status, Utc::now())?;
        index.put(updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.lock()?.remove(id))
    }
}
