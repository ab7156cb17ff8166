//! Register Mission use case
//!
//! Creates the mission record that plan execution later marks as
//! orchestrated. The record id is the mission id.

use crate::ports::record_store::{NewRecord, RecordKind, RecordStore, StoreError, StoredRecord};
use mission_domain::{MissionBrief, MissionId, MissionStatus};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RegisterMissionError {
    #[error("Mission already registered: {0}")]
    AlreadyRegistered(MissionId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub struct RegisterMissionUseCase<S: RecordStore + 'static> {
    store: Arc<S>,
}

impl<S: RecordStore + 'static> RegisterMissionUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        mission_id: &MissionId,
        brief: &MissionBrief,
    ) -> Result<StoredRecord, RegisterMissionError> {
        let record = NewRecord::new(
            RecordKind::Mission,
            mission_id.clone(),
            serde_json::to_value(brief).map_err(StoreError::from)?,
            MissionStatus::Pending.as_str(),
        )
        .with_id(mission_id.as_str());

        match self.store.create(record).await {
            Ok(stored) => {
                info!(mission_id = %mission_id, "Mission registered");
                Ok(stored)
            }
            Err(StoreError::Conflict(_)) => {
                Err(RegisterMissionError::AlreadyRegistered(mission_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
