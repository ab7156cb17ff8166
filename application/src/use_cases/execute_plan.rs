//! Execute Plan use case
//!
//! Turns every workflow step of a plan into an agent brief, queues the
//! briefs in the record store and marks the mission as orchestrated.
//!
//! Writes are not transactional: when a later write fails, briefs that
//! were already queued stay in the store.

use crate::ports::orchestration_logger::{
    NoOrchestrationLogger, OrchestrationEvent, OrchestrationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::record_store::{NewRecord, RecordKind, RecordStore, StoreError};
use mission_domain::{AgentBrief, AgentId, MissionStatus, OrchestrationPlan};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum ExecutePlanError {
    #[error("Step {step} references agent {agent_id} which is not part of the plan")]
    UnknownAgent { step: u32, agent_id: AgentId },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Ids of the records written by a successful execution
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReceipt {
    /// Brief record ids in step order
    pub brief_ids: Vec<String>,
    pub mission_status: MissionStatus,
}

pub struct ExecutePlanUseCase<S: RecordStore + 'static> {
    store: Arc<S>,
    logger: Arc<dyn OrchestrationLogger>,
}

impl<S: RecordStore + 'static> ExecutePlanUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            logger: Arc::new(NoOrchestrationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn OrchestrationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the plan, reporting any failure as `false`
    pub async fn execute(&self, plan: &OrchestrationPlan) -> bool {
        self.execute_with_progress(plan, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        plan: &OrchestrationPlan,
        progress: &dyn ProgressNotifier,
    ) -> bool {
        match self.try_execute_with_progress(plan, progress).await {
            Ok(_) => true,
            Err(e) => {
                error!(mission_id = %plan.mission_id, error = %e, "Plan execution failed");
                self.logger.log(OrchestrationEvent::new(
                    "execution_failed",
                    serde_json::json!({ "mission_id": plan.mission_id, "error": e.to_string() }),
                ));
                false
            }
        }
    }

    pub async fn try_execute(
        &self,
        plan: &OrchestrationPlan,
    ) -> Result<ExecutionReceipt, ExecutePlanError> {
        self.try_execute_with_progress(plan, &NoProgress).await
    }

    pub async fn try_execute_with_progress(
        &self,
        plan: &OrchestrationPlan,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExecutionReceipt, ExecutePlanError> {
        info!(
            mission_id = %plan.mission_id,
            steps = plan.workflow.len(),
            "Executing plan"
        );

        let mut brief_ids = Vec::with_capacity(plan.workflow.len());
        for step in &plan.workflow {
            let agent = plan
                .agent(&step.agent_id)
                .ok_or_else(|| ExecutePlanError::UnknownAgent {
                    step: step.step,
                    agent_id: step.agent_id.clone(),
                })?;

            let brief = AgentBrief::compose(plan, step, agent);
            let record = NewRecord::new(
                RecordKind::Brief,
                plan.mission_id.clone(),
                serde_json::to_value(&brief).map_err(StoreError::from)?,
                brief.status.as_str(),
            );
            let stored = self.store.create(record).await?;

            debug!(
                mission_id = %plan.mission_id,
                step = step.step,
                agent = %agent.id,
                record_id = %stored.id,
                "Brief queued"
            );
            self.logger.log(OrchestrationEvent::new(
                "brief_queued",
                serde_json::json!({
                    "mission_id": plan.mission_id,
                    "step": step.step,
                    "agent_id": agent.id,
                    "record_id": stored.id,
                }),
            ));
            progress.on_brief_queued(&brief);
            brief_ids.push(stored.id);
        }

        let status = MissionStatus::Orchestrated;
        self.store
            .update_status(plan.mission_id.as_str(), status.as_str())
            .await?;

        info!(
            mission_id = %plan.mission_id,
            briefs = brief_ids.len(),
            "Mission orchestrated"
        );
        self.logger.log(OrchestrationEvent::new(
            "mission_orchestrated",
            serde_json::json!({ "mission_id": plan.mission_id, "briefs": brief_ids }),
        ));

        Ok(ExecutionReceipt {
            brief_ids,
            mission_status: status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::record_store::RecordFilter;
    use crate::use_cases::register_mission::RegisterMissionUseCase;
    use crate::use_cases::testing::{MemoryStore, RecordingLogger, RecordingProgress};
    use chrono::{TimeZone, Utc};
    use mission_domain::{MissionBrief, MissionId, MissionPlanner, Priority};

    fn brief() -> MissionBrief {
        MissionBrief::new("Créer une stratégie marketing pour une startup tech")
            .with_context("Startup B2B, budget limité")
            .with_priority(Priority::High)
    }

    fn plan(mission: &str) -> OrchestrationPlan {
        MissionPlanner::default()
            .plan(
                &MissionId::new(mission),
                &brief(),
                Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            )
            .unwrap()
    }

    async fn registered(store: &Arc<MemoryStore>, mission: &str) {
        RegisterMissionUseCase::new(store.clone())
            .execute(&MissionId::new(mission), &brief())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_execute_queues_one_brief_per_step() {
        let store = Arc::new(MemoryStore::default());
        registered(&store, "m-1").await;
        let plan = plan("m-1");
        let progress = RecordingProgress::default();

        let use_case = ExecutePlanUseCase::new(store.clone());
        assert!(use_case.execute_with_progress(&plan, &progress).await);

        let briefs = store
            .list(&RecordFilter::new().kind(RecordKind::Brief))
            .await
            .unwrap();
        assert_eq!(briefs.len(), plan.workflow.len());
        assert!(briefs.iter().all(|b| b.status == "queued"));
        assert_eq!(briefs[1].payload["dependencies"], serde_json::json!([1]));
        assert_eq!(progress.queued_steps(), vec![1, 2, 3]);

        let mission = store.get("m-1").await.unwrap().unwrap();
        assert_eq!(mission.status, "orchestrated");
    }

    #[tokio::test]
    async fn test_try_execute_returns_receipt() {
        let store = Arc::new(MemoryStore::default());
        registered(&store, "m-1").await;

        let receipt = ExecutePlanUseCase::new(store)
            .try_execute(&plan("m-1"))
            .await
            .unwrap();
        assert_eq!(receipt.brief_ids.len(), 3);
        assert_eq!(receipt.mission_status, MissionStatus::Orchestrated);
    }

    #[tokio::test]
    async fn test_missing_mission_record_fails_after_briefs() {
        let store = Arc::new(MemoryStore::default());
        let logger = Arc::new(RecordingLogger::default());
        let use_case = ExecutePlanUseCase::new(store.clone()).with_logger(logger.clone());

        assert!(!use_case.execute(&plan("unregistered")).await);
        assert_eq!(store.records().len(), 3);
        assert_eq!(logger.event_types().last(), Some(&"execution_failed"));
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_written_briefs() {
        // mission record + first brief succeed, second brief fails
        let store = Arc::new(MemoryStore::failing_creates_after(2));
        registered(&store, "m-1").await;

        let use_case = ExecutePlanUseCase::new(store.clone());
        let err = use_case.try_execute(&plan("m-1")).await.unwrap_err();
        assert!(matches!(err, ExecutePlanError::Store(StoreError::Unavailable(_))));

        let briefs = store
            .list(&RecordFilter::new().kind(RecordKind::Brief))
            .await
            .unwrap();
        assert_eq!(briefs.len(), 1);
        assert_eq!(store.get("m-1").await.unwrap().unwrap().status, "pending");
    }

    #[tokio::test]
    async fn test_status_update_failure_reports_false() {
        let store = Arc::new(MemoryStore::failing_updates());
        registered(&store, "m-1").await;
        assert!(!ExecutePlanUseCase::new(store).execute(&plan("m-1")).await);
    }

    #[tokio::test]
    async fn test_step_with_foreign_agent_is_rejected() {
        let store = Arc::new(MemoryStore::default());
        registered(&store, "m-1").await;
        let mut plan = plan("m-1");
        plan.workflow[0].agent_id = AgentId::new("ghost");

        let err = ExecutePlanUseCase::new(store.clone())
            .try_execute(&plan)
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutePlanError::UnknownAgent { step: 1, .. }));
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_plan_only_flips_status() {
        let store = Arc::new(MemoryStore::default());
        registered(&store, "m-1").await;
        let mut plan = plan("m-1");
        plan.workflow.clear();

        let receipt = ExecutePlanUseCase::new(store.clone())
            .try_execute(&plan)
            .await
            .unwrap();
        assert!(receipt.brief_ids.is_empty());
        assert_eq!(store.get("m-1").await.unwrap().unwrap().status, "orchestrated");
    }
}
