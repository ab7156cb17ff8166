//! Read-side queries over stored mission records

use crate::ports::record_store::{RecordFilter, RecordKind, RecordStore, StoreError, StoredRecord};
use mission_domain::{AgentBrief, MissionId, OrchestrationPlan};
use std::sync::Arc;

/// A stored brief together with its current record status
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedBrief {
    pub record_id: String,
    pub status: String,
    pub brief: AgentBrief,
}

pub struct MissionQueries<S: RecordStore + 'static> {
    store: Arc<S>,
}

impl<S: RecordStore + 'static> MissionQueries<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn mission(&self, mission_id: &MissionId) -> Result<Option<StoredRecord>, StoreError> {
        self.store.get(mission_id.as_str()).await
    }

    /// Most recently stored plan for the mission
    pub async fn latest_plan(
        &self,
        mission_id: &MissionId,
    ) -> Result<Option<OrchestrationPlan>, StoreError> {
        let filter = RecordFilter::new()
            .kind(RecordKind::Plan)
            .mission(mission_id.clone());
        match self.store.list(&filter).await?.pop() {
            Some(record) => Ok(Some(serde_json::from_value(record.payload)?)),
            None => Ok(None),
        }
    }

    /// Briefs of the mission ordered by step
    pub async fn briefs(&self, mission_id: &MissionId) -> Result<Vec<QueuedBrief>, StoreError> {
        let filter = RecordFilter::new()
            .kind(RecordKind::Brief)
            .mission(mission_id.clone());
        let mut briefs = self
            .store
            .list(&filter)
            .await?
            .into_iter()
            .map(|record| {
                Ok(QueuedBrief {
                    brief: serde_json::from_value(record.payload)?,
                    record_id: record.id,
                    status: record.status,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;
        briefs.sort_by_key(|b| b.brief.step);
        Ok(briefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::execute_plan::ExecutePlanUseCase;
    use crate::use_cases::orchestrate_mission::{
        OrchestrateMissionInput, OrchestrateMissionUseCase,
    };
    use crate::use_cases::testing::MemoryStore;
    use chrono::{TimeZone, Utc};
    use mission_domain::{MissionBrief, MissionPlanner};

    #[tokio::test]
    async fn test_reads_back_plan_and_briefs() {
        let store = Arc::new(MemoryStore::default());
        let input = OrchestrateMissionInput::new(
            "m-1",
            MissionBrief::new("Créer une stratégie marketing"),
        )
        .at(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
        let output = OrchestrateMissionUseCase::new(MissionPlanner::default(), store.clone())
            .execute(input)
            .await
            .unwrap();
        ExecutePlanUseCase::new(store.clone())
            .execute(&output.plan)
            .await;

        let queries = MissionQueries::new(store);
        let id = MissionId::new("m-1");

        let plan = queries.latest_plan(&id).await.unwrap().unwrap();
        assert_eq!(plan, output.plan);

        let briefs = queries.briefs(&id).await.unwrap();
        assert_eq!(briefs.len(), output.plan.workflow.len());
        assert_eq!(briefs[0].brief.step, 1);
        assert!(briefs.iter().all(|b| b.status == "queued"));
    }

    #[tokio::test]
    async fn test_unknown_mission_is_empty() {
        let queries = MissionQueries::new(Arc::new(MemoryStore::default()));
        let id = MissionId::new("nope");
        assert!(queries.latest_plan(&id).await.unwrap().is_none());
        assert!(queries.briefs(&id).await.unwrap().is_empty());
        assert!(queries.mission(&id).await.unwrap().is_none());
    }
}
