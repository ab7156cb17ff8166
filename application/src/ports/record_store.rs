//! Record store port
//!
//! Defines the persistence contract for mission, plan and brief records.
//! Records are deliberately schemaless: a kind, a mission foreign key,
//! a JSON payload and a free-form status string.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mission_domain::MissionId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during record store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    Conflict(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// What a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Mission,
    Plan,
    Brief,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Mission => "mission",
            RecordKind::Plan => "plan",
            RecordKind::Brief => "brief",
        }
    }
}

/// A persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    pub kind: RecordKind,
    pub mission_id: MissionId,
    pub payload: serde_json::Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    /// Explicit id; the store generates one when `None`
    pub id: Option<String>,
    pub kind: RecordKind,
    pub mission_id: MissionId,
    pub payload: serde_json::Value,
    pub status: String,
}

impl NewRecord {
    pub fn new(
        kind: RecordKind,
        mission_id: MissionId,
        payload: serde_json::Value,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            kind,
            mission_id,
            payload,
            status: status.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Stamp the record with an id and creation time.
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> StoredRecord {
        StoredRecord {
            id,
            kind: self.kind,
            mission_id: self.mission_id,
            payload: self.payload,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Filter for [`RecordStore::list`]; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub kind: Option<RecordKind>,
    pub mission_id: Option<MissionId>,
    pub status: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn mission(mut self, mission_id: MissionId) -> Self {
        self.mission_id = Some(mission_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn matches(&self, record: &StoredRecord) -> bool {
        self.kind.is_none_or(|k| k == record.kind)
            && self
                .mission_id
                .as_ref()
                .is_none_or(|m| m == &record.mission_id)
            && self.status.as_ref().is_none_or(|s| s == &record.status)
    }
}

/// External storage for orchestration records
///
/// Implementations (adapters) live in the infrastructure layer.
/// `list` returns records in creation order.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a record; fails with [`StoreError::Conflict`] if the id exists
    async fn create(&self, record: NewRecord) -> Result<StoredRecord, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError>;

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, StoreError>;

    /// Change a record's status; fails with [`StoreError::NotFound`] if absent
    async fn update_status(&self, id: &str, status: &str) -> Result<StoredRecord, StoreError>;

    /// Returns whether a record was removed
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
