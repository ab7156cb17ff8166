//! In-memory record table shared by the store adapters

use chrono::{DateTime, Utc};
use mission_application::{NewRecord, RecordFilter, StoreError, StoredRecord};

/// Records in creation order
#[derive(Debug, Default)]
pub(crate) struct RecordIndex {
    records: Vec<StoredRecord>,
}

impl RecordIndex {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn insert(&mut self, record: NewRecord, now: DateTime<Utc>) -> Result<StoredRecord, StoreError> {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        if self.position(&id).is_some() {
            return Err(StoreError::Conflict(id));
        }
        let stored = record.into_record(id, now);
        self.records.push(stored.clone());
        Ok(stored)
    }

    /// Insert or replace a record as-is; used when replaying a log
    pub fn put(&mut self, record: StoredRecord) {
        match self.position(&record.id) {
            Some(i) => self.records[i] = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, id: &str) -> Option<&StoredRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn list(&self, filter: &RecordFilter) -> Vec<StoredRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Status change without mutating the index
    pub fn with_status(
        &self,
        id: &str,
        status: &str,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, StoreError> {
        let mut record = self
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.status = status.to_string();
        record.updated_at = now;
        Ok(record)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(i) => {
                self.records.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
