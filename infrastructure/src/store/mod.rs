//! Record store adapters implementing the
//! [`RecordStore`](mission_application::RecordStore) port.

mod index;
mod jsonl;
mod memory;

pub use jsonl::JsonlRecordStore;
pub use memory::InMemoryRecordStore;

use crate::config::{FileStorageConfig, StorageBackend};
use async_trait::async_trait;
use mission_application::{NewRecord, RecordFilter, RecordStore, StoreError, StoredRecord};

/// Store selected from configuration
pub enum ConfiguredStore {
    Memory(InMemoryRecordStore),
    Jsonl(JsonlRecordStore),
}

impl ConfiguredStore {
    pub fn from_config(config: &FileStorageConfig) -> Result<Self, StoreError> {
        match config.backend {
            StorageBackend::Memory => Ok(Self::Memory(InMemoryRecordStore::new())),
            StorageBackend::Jsonl => {
                let path = config.path.as_ref().ok_or_else(|| {
                    StoreError::Unavailable("storage.path is not configured".to_string())
                })?;
                Ok(Self::Jsonl(JsonlRecordStore::open(path)?))
            }
        }
    }

    pub fn backend(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::Jsonl(_) => StorageBackend::Jsonl,
        }
    }

    fn inner(&self) -> &dyn RecordStore {
        match self {
            Self::Memory(store) => store,
            Self::Jsonl(store) => store,
        }
    }
}

#[async_trait]
impl RecordStore for ConfiguredStore {
    async fn create(&self, record: NewRecord) -> Result<StoredRecord, StoreError> {
        self.inner().create(record).await
    }

    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError> {
        self.inner().get(id).await
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, StoreError> {
        self.inner().list(filter).await
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<StoredRecord, StoreError> {
        self.inner().update_status(id, status).await
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.inner().delete(id).await
    }
}
