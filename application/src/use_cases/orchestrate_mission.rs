//! Orchestrate Mission use case
//!
//! Plans a mission from its brief, then makes a best-effort attempt to
//! persist the plan. A failed write is logged and never fails the call.

use crate::ports::orchestration_logger::{
    NoOrchestrationLogger, OrchestrationEvent, OrchestrationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::record_store::{NewRecord, RecordKind, RecordStore, StoreError};
use chrono::{DateTime, Utc};
use mission_domain::{
    DomainError, MissionBrief, MissionId, MissionPlanner, OrchestrationPlan, PlanningStage,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Status written on persisted plan records
pub const PLAN_STATUS: &str = "planned";

/// Errors that abort an orchestration
#[derive(Error, Debug)]
pub enum OrchestrateError {
    #[error("Planning failed: {0}")]
    Planning(#[from] DomainError),
}

/// Input for the OrchestrateMission use case
#[derive(Debug, Clone)]
pub struct OrchestrateMissionInput {
    pub mission_id: MissionId,
    pub brief: MissionBrief,
    /// Reference time for deadline checks
    pub requested_at: DateTime<Utc>,
}

impl OrchestrateMissionInput {
    pub fn new(mission_id: impl Into<MissionId>, brief: MissionBrief) -> Self {
        Self {
            mission_id: mission_id.into(),
            brief,
            requested_at: Utc::now(),
        }
    }

    pub fn at(mut self, requested_at: DateTime<Utc>) -> Self {
        self.requested_at = requested_at;
        self
    }
}

/// Successful orchestration
#[derive(Debug, Clone)]
pub struct OrchestrateMissionOutput {
    pub plan: OrchestrationPlan,
    pub recommendations: Vec<String>,
    /// Id of the stored plan record, `None` if the write failed
    pub plan_record_id: Option<String>,
}

impl OrchestrateMissionOutput {
    pub fn persisted(&self) -> bool {
        self.plan_record_id.is_some()
    }
}

/// Wire shape of an orchestration outcome:
/// `{success: true, plan, recommendations}` or `{success: false, error}`
#[derive(Debug, Clone, Serialize)]
pub struct OrchestrationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<OrchestrationPlan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<OrchestrateMissionOutput, OrchestrateError>> for OrchestrationResponse {
    fn from(result: Result<OrchestrateMissionOutput, OrchestrateError>) -> Self {
        match result {
            Ok(output) => Self {
                success: true,
                plan: Some(output.plan),
                recommendations: output.recommendations,
                error: None,
            },
            Err(e) => Self {
                success: false,
                plan: None,
                recommendations: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Use case for planning a mission
pub struct OrchestrateMissionUseCase<S: RecordStore + 'static> {
    planner: MissionPlanner,
    store: Arc<S>,
    logger: Arc<dyn OrchestrationLogger>,
}

impl<S: RecordStore + 'static> OrchestrateMissionUseCase<S> {
    pub fn new(planner: MissionPlanner, store: Arc<S>) -> Self {
        Self {
            planner,
            store,
            logger: Arc::new(NoOrchestrationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn OrchestrationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn planner(&self) -> &MissionPlanner {
        &self.planner
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: OrchestrateMissionInput,
    ) -> Result<OrchestrateMissionOutput, OrchestrateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: OrchestrateMissionInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<OrchestrateMissionOutput, OrchestrateError> {
        info!(
            mission_id = %input.mission_id,
            priority = %input.brief.priority,
            "Orchestrating mission"
        );

        let plan = self.plan(&input, progress)?;
        let recommendations = self.planner.recommendations(&plan, &input.brief);

        info!(
            mission_id = %plan.mission_id,
            agents = plan.agents.len(),
            steps = plan.workflow.len(),
            duration_minutes = plan.estimated_duration,
            confidence = plan.confidence,
            risks = plan.risks.len(),
            "Plan created"
        );
        self.logger.log(OrchestrationEvent::new(
            "plan_created",
            serde_json::json!({
                "mission_id": plan.mission_id,
                "agents": plan.agents.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
                "steps": plan.workflow.len(),
                "estimated_duration": plan.estimated_duration,
                "confidence": plan.confidence,
                "risks": plan.risks,
            }),
        ));

        let plan_record_id = match self.persist(&plan).await {
            Ok(id) => {
                debug!(mission_id = %plan.mission_id, record_id = %id, "Plan persisted");
                self.logger.log(OrchestrationEvent::new(
                    "plan_persisted",
                    serde_json::json!({ "mission_id": plan.mission_id, "record_id": id }),
                ));
                Some(id)
            }
            Err(e) => {
                warn!(mission_id = %plan.mission_id, error = %e, "Failed to persist plan");
                self.logger.log(OrchestrationEvent::new(
                    "plan_persist_failed",
                    serde_json::json!({ "mission_id": plan.mission_id, "error": e.to_string() }),
                ));
                None
            }
        };

        Ok(OrchestrateMissionOutput {
            plan,
            recommendations,
            plan_record_id,
        })
    }

    /// Run the planner, mapping stage starts onto progress callbacks
    fn plan(
        &self,
        input: &OrchestrateMissionInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<OrchestrationPlan, DomainError> {
        let mut current: Option<PlanningStage> = None;
        let result = self.planner.plan_with(
            &input.mission_id,
            &input.brief,
            input.requested_at,
            |stage| {
                if let Some(previous) = current.replace(stage) {
                    progress.on_stage_complete(&previous);
                }
                debug!(stage = stage.as_str(), "Planning stage started");
                progress.on_stage_start(&stage);
            },
        );

        if let Some(last) = current
            && result.is_ok()
        {
            progress.on_stage_complete(&last);
        }
        if let Err(e) = &result {
            warn!(mission_id = %input.mission_id, error = %e, "Planning failed");
            self.logger.log(OrchestrationEvent::new(
                "planning_failed",
                serde_json::json!({ "mission_id": input.mission_id, "error": e.to_string() }),
            ));
        }
        result
    }

    async fn persist(&self, plan: &OrchestrationPlan) -> Result<String, StoreError> {
        let payload = serde_json::to_value(plan)?;
        let record = NewRecord::new(
            RecordKind::Plan,
            plan.mission_id.clone(),
            payload,
            PLAN_STATUS,
        );
        Ok(self.store.create(record).await?.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::record_store::RecordFilter;
    use crate::use_cases::testing::{FailingStore, MemoryStore, RecordingLogger, RecordingProgress};
    use chrono::{Duration, TimeZone};
    use mission_domain::Priority;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn input() -> OrchestrateMissionInput {
        OrchestrateMissionInput::new(
            "mission-42",
            MissionBrief::new("Créer une stratégie marketing pour une startup tech")
                .with_context("Startup B2B, budget limité")
                .with_priority(Priority::High),
        )
        .at(now())
    }

    #[tokio::test]
    async fn test_plan_is_returned_and_persisted() {
        let store = Arc::new(MemoryStore::default());
        let use_case = OrchestrateMissionUseCase::new(MissionPlanner::default(), store.clone());

        let output = use_case.execute(input()).await.expect("should succeed");

        assert!(output.persisted());
        assert_eq!(output.plan.agents[0].id.as_str(), "karine-ai");
        assert_eq!(output.recommendations.len(), 1);

        let plans = store
            .list(&RecordFilter::new().kind(RecordKind::Plan))
            .await
            .unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].status, PLAN_STATUS);
        assert_eq!(plans[0].mission_id.as_str(), "mission-42");

        let stored: OrchestrationPlan = serde_json::from_value(plans[0].payload.clone()).unwrap();
        assert_eq!(stored, output.plan);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_not_fatal() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case =
            OrchestrateMissionUseCase::new(MissionPlanner::default(), Arc::new(FailingStore))
                .with_logger(logger.clone());

        let output = use_case.execute(input()).await.expect("should still succeed");

        assert!(!output.persisted());
        assert!(!output.plan.workflow.is_empty());
        assert_eq!(logger.event_types(), vec!["plan_created", "plan_persist_failed"]);
    }

    #[tokio::test]
    async fn test_progress_sees_every_stage_once() {
        let progress = RecordingProgress::default();
        let use_case =
            OrchestrateMissionUseCase::new(MissionPlanner::default(), Arc::new(MemoryStore::default()));

        use_case
            .execute_with_progress(input(), &progress)
            .await
            .unwrap();

        assert_eq!(progress.started(), PlanningStage::ALL.to_vec());
        assert_eq!(progress.completed(), PlanningStage::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_deadline_risk_flows_into_recommendations() {
        let use_case =
            OrchestrateMissionUseCase::new(MissionPlanner::default(), Arc::new(MemoryStore::default()));
        let mut input = input();
        input.brief = input.brief.with_deadline(now() + Duration::minutes(5));

        let output = use_case.execute(input).await.unwrap();
        assert!(output.plan.risks[0].starts_with("Insufficient time"));
    }

    #[tokio::test]
    async fn test_response_shapes() {
        let use_case =
            OrchestrateMissionUseCase::new(MissionPlanner::default(), Arc::new(MemoryStore::default()));
        let ok: OrchestrationResponse = use_case.execute(input()).await.into();
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("plan").is_some());
        assert!(json.get("error").is_none());

        let failed: OrchestrationResponse = Err::<OrchestrateMissionOutput, _>(
            OrchestrateError::Planning(DomainError::InvalidWorkflow("bad".to_string())),
        )
        .into();
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Planning failed: Invalid workflow: bad");
        assert!(json.get("plan").is_none());
    }
}
