//! Test doubles shared by the use case tests

use crate::ports::orchestration_logger::{OrchestrationEvent, OrchestrationLogger};
use crate::ports::progress::ProgressNotifier;
use crate::ports::record_store::{NewRecord, RecordFilter, RecordStore, StoreError, StoredRecord};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mission_domain::{AgentBrief, PlanningStage};
use std::sync::Mutex;

/// In-memory store with optional injected failures
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredRecord>>,
    next_id: Mutex<usize>,
    /// Number of successful creates before every further create fails
    fail_creates_after: Option<usize>,
    fail_updates: bool,
}

impl MemoryStore {
    pub fn failing_creates_after(n: usize) -> Self {
        Self {
            fail_creates_after: Some(n),
            ..Self::default()
        }
    }

    pub fn failing_updates() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, record: NewRecord) -> Result<StoredRecord, StoreError> {
        let mut next_id = self.next_id.lock().unwrap();
        if self.fail_creates_after.is_some_and(|n| *next_id >= n) {
            return Err(StoreError::Unavailable("injected create failure".to_string()));
        }
        *next_id += 1;

        let id = record.id.clone().unwrap_or_else(|| format!("rec-{}", next_id));
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.id == id) {
            return Err(StoreError::Conflict(id));
        }
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let stored = record.into_record(id, now);
        records.push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError> {
        Ok(self.records.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<StoredRecord, StoreError> {
        if self.fail_updates {
            return Err(StoreError::Unavailable("injected update failure".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.status = status.to_string();
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }
}

/// Store where every operation fails
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn create(&self, _record: NewRecord) -> Result<StoredRecord, StoreError> {
        Err(StoreError::Unavailable("down".to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<StoredRecord>, StoreError> {
        Err(StoreError::Unavailable("down".to_string()))
    }

    async fn list(&self, _filter: &RecordFilter) -> Result<Vec<StoredRecord>, StoreError> {
        Err(StoreError::Unavailable("down".to_string()))
    }

    async fn update_status(&self, _id: &str, _status: &str) -> Result<StoredRecord, StoreError> {
        Err(StoreError::Unavailable("down".to_string()))
    }

    async fn delete(&self, _id: &str) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("down".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl OrchestrationLogger for RecordingLogger {
    fn log(&self, event: OrchestrationEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    started: Mutex<Vec<PlanningStage>>,
    completed: Mutex<Vec<PlanningStage>>,
    queued: Mutex<Vec<u32>>,
}

impl RecordingProgress {
    pub fn started(&self) -> Vec<PlanningStage> {
        self.started.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<PlanningStage> {
        self.completed.lock().unwrap().clone()
    }

    pub fn queued_steps(&self) -> Vec<u32> {
        self.queued.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: &PlanningStage) {
        self.started.lock().unwrap().push(*stage);
    }

    fn on_stage_complete(&self, stage: &PlanningStage) {
        self.completed.lock().unwrap().push(*stage);
    }

    fn on_brief_queued(&self, brief: &AgentBrief) {
        self.queued.lock().unwrap().push(brief.step);
    }
}
