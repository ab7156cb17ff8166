//! Mission planner: brief in, orchestration plan out.
//!
//! The planner is a pure function over the static registry and a
//! [`PlanningPolicy`]. It performs no I/O; persistence and logging of the
//! resulting plan belong to the application layer.

use super::assessment;
use super::plan::OrchestrationPlan;
use super::policy::PlanningPolicy;
use super::scoring::{rank_agents, select_agents};
use super::stage::PlanningStage;
use super::workflow::{build_workflow, validate_workflow};
use crate::agent::AgentRegistry;
use crate::core::error::DomainError;
use crate::mission::{MissionBrief, MissionId, RequirementVector};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MissionPlanner {
    registry: Arc<AgentRegistry>,
    policy: PlanningPolicy,
}

impl MissionPlanner {
    pub fn new(registry: Arc<AgentRegistry>, policy: PlanningPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &PlanningPolicy {
        &self.policy
    }

    /// Plan a mission. `now` anchors the deadline check.
    pub fn plan(
        &self,
        mission_id: &MissionId,
        brief: &MissionBrief,
        now: DateTime<Utc>,
    ) -> Result<OrchestrationPlan, DomainError> {
        self.plan_with(mission_id, brief, now, |_| {})
    }

    /// Plan a mission, calling `on_stage` as each stage starts.
    pub fn plan_with<F>(
        &self,
        mission_id: &MissionId,
        brief: &MissionBrief,
        now: DateTime<Utc>,
        mut on_stage: F,
    ) -> Result<OrchestrationPlan, DomainError>
    where
        F: FnMut(PlanningStage),
    {
        let policy = &self.policy;

        on_stage(PlanningStage::RequirementExtraction);
        let requirements =
            RequirementVector::extract(brief, policy.keyword_matching, policy.keyword_weight);

        on_stage(PlanningStage::AgentSelection);
        let scores = rank_agents(&self.registry, &requirements, brief.priority, policy);
        let agents = select_agents(&self.registry, &scores, policy.team_size());

        on_stage(PlanningStage::WorkflowConstruction);
        let workflow = build_workflow(&agents, &brief.objective);
        validate_workflow(&workflow)?;

        on_stage(PlanningStage::RiskAssessment);
        let estimated_duration = assessment::total_duration(&workflow);
        let confidence = assessment::confidence(&agents, workflow.len(), policy);
        let risks = assessment::identify_risks(&agents, &workflow, brief.deadline, now, policy);
        let alternatives = assessment::alternatives(&agents, &self.registry, policy);

        Ok(OrchestrationPlan {
            mission_id: mission_id.clone(),
            agents,
            scores,
            requirements,
            workflow,
            estimated_duration,
            confidence,
            risks,
            alternatives,
            created_at: now,
        })
    }

    /// Advice derived from a finished plan.
    pub fn recommendations(&self, plan: &OrchestrationPlan, brief: &MissionBrief) -> Vec<String> {
        assessment::recommendations(plan, brief.priority, &self.policy)
    }
}

impl Default for MissionPlanner {
    fn default() -> Self {
        Self::new(Arc::new(AgentRegistry::builtin()), PlanningPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::{Priority, RequirementCategory};
    use crate::planning::workflow::StepAction;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn marketing_brief() -> MissionBrief {
        MissionBrief::new("Créer une stratégie marketing pour une startup tech")
            .with_context("Startup B2B, budget limité")
            .with_priority(Priority::High)
    }

    fn ids(plan: &OrchestrationPlan) -> Vec<&str> {
        plan.agents.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_marketing_scenario() {
        let planner = MissionPlanner::default();
        let plan = planner
            .plan(&MissionId::new("m-1"), &marketing_brief(), now())
            .unwrap();

        assert!(plan.requirements.weight(RequirementCategory::Marketing) > 0.0);
        assert_eq!(ids(&plan), vec!["karine-ai", "lucas-ai", "sophie-ai", "clara-ai"]);

        let first = &plan.workflow[0];
        assert_eq!(first.action, StepAction::Analysis);
        let performer = plan.agent(&first.agent_id).unwrap();
        assert!(performer.has_any_specialty(&["analyse", "stratégie"]));

        // 45 + 30 + 35
        assert_eq!(plan.estimated_duration, 110);
        assert_eq!(plan.confidence, 100.0);
        assert!(plan.risks.is_empty());
        assert_eq!(plan.alternatives.len(), 2);
        assert_eq!(plan.scores.len(), 6);
        assert_eq!(plan.mission_id.as_str(), "m-1");
    }

    #[test]
    fn test_empty_brief_ranks_on_flat_bonuses() {
        let planner = MissionPlanner::default();
        let plan = planner
            .plan(&MissionId::new("m-empty"), &MissionBrief::new(""), now())
            .unwrap();

        assert!(plan.requirements.is_zero());
        assert_eq!(ids(&plan), vec!["karine-ai", "lucas-ai", "sophie-ai", "clara-ai"]);
        let top = plan.score_of(&plan.agents[0].id).unwrap();
        assert!((top - 19.2).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_time_scenario() {
        let planner = MissionPlanner::default();
        let brief = marketing_brief().with_deadline(now() + Duration::minutes(5));
        let plan = planner.plan(&MissionId::new("m-2"), &brief, now()).unwrap();

        assert!(plan.estimated_duration > 5);
        assert!(plan.risks.iter().any(|r| r.starts_with("Insufficient time")));
    }

    #[test]
    fn test_critical_priority_favours_advanced_agents() {
        let planner = MissionPlanner::default();
        let brief = MissionBrief::new("Campagne de vente").with_priority(Priority::Critical);
        let plan = planner.plan(&MissionId::new("m-3"), &brief, now()).unwrap();

        assert!(plan.agents.iter().take(3).all(|a| a.is_advanced()));
        let advice = planner.recommendations(&plan, &brief);
        assert!(advice.iter().any(|a| a.starts_with("Critical priority")));
    }

    #[test]
    fn test_stages_reported_in_order() {
        let planner = MissionPlanner::default();
        let mut stages = Vec::new();
        planner
            .plan_with(&MissionId::new("m-4"), &marketing_brief(), now(), |s| {
                stages.push(s)
            })
            .unwrap();
        assert_eq!(stages, PlanningStage::ALL.to_vec());
    }

    #[test]
    fn test_recommendations_for_solid_plan() {
        let planner = MissionPlanner::default();
        let brief = marketing_brief();
        let plan = planner.plan(&MissionId::new("m-5"), &brief, now()).unwrap();
        assert_eq!(
            planner.recommendations(&plan, &brief),
            vec!["Plan looks solid: ready for execution".to_string()]
        );
    }

    #[test]
    fn test_recommendations_for_long_low_confidence_plan() {
        let planner = MissionPlanner::default();
        let brief = MissionBrief::new("x");
        let mut plan = planner.plan(&MissionId::new("m-6"), &brief, now()).unwrap();
        plan.estimated_duration = 200;
        plan.confidence = 60.0;
        plan.risks = vec!["a".into(), "b".into(), "c".into()];

        let advice = planner.recommendations(&plan, &brief);
        assert_eq!(advice.len(), 3);
        assert!(advice[0].starts_with("Long mission (200 min)"));
        assert!(advice[1].starts_with("Low confidence"));
        assert!(advice[2].starts_with("Several risks"));
    }

    #[test]
    fn test_oversized_max_agents_still_selects_four() {
        let policy = PlanningPolicy::default().with_max_agents(6);
        let planner = MissionPlanner::new(Arc::new(AgentRegistry::builtin()), policy);
        let plan = planner.plan(&MissionId::new("m-7"), &marketing_brief(), now()).unwrap();
        assert_eq!(plan.agents.len(), 4);
    }

    #[test]
    fn test_negative_bonuses_never_yield_negative_scores() {
        let policy = PlanningPolicy {
            availability_bonus: -50.0,
            critical_advanced_bonus: -50.0,
            ..PlanningPolicy::default()
        };
        let planner = MissionPlanner::new(Arc::new(AgentRegistry::builtin()), policy);
        let brief = MissionBrief::new("x").with_priority(Priority::Critical);
        let plan = planner.plan(&MissionId::new("m-8"), &brief, now()).unwrap();
        assert!(plan.scores.iter().all(|s| s.score >= 0.0));
        assert!(plan.agents.len() <= 4);
    }

    #[test]
    fn test_empty_registry_gives_empty_plan() {
        let registry = AgentRegistry::new(Vec::new()).unwrap();
        let planner = MissionPlanner::new(Arc::new(registry), PlanningPolicy::default());
        let plan = planner
            .plan(&MissionId::new("m-7"), &marketing_brief(), now())
            .unwrap();

        assert!(plan.agents.is_empty());
        assert!(plan.workflow.is_empty());
        assert_eq!(plan.confidence, 0.0);
        assert!(plan.alternatives.is_empty());
    }
}
