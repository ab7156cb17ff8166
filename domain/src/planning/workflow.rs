//! Workflow construction from the selected agents.
//!
//! The shape is a fixed template: an analysis step first, then optional
//! development, content and conversion steps, closed by a validation step
//! run by a second analyst. Which steps appear depends only on the roles
//! present in the selection (and, for development, on the objective text).

use crate::agent::{AgentId, AgentProfile};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

const ANALYSIS_TAGS: &[&str] = &["analyse", "stratégie"];
/// Final validation needs a genuine analyst; strategy alone is not enough.
const REVIEW_TAGS: &[&str] = &["analyse"];
const DEVELOPMENT_TAGS: &[&str] = &["développement"];
const CONTENT_TAGS: &[&str] = &["contenu", "rédaction"];
const CONVERSION_TAGS: &[&str] = &["conversion", "vente"];

/// Objective keyword that unlocks the development step.
const DEVELOPMENT_TRIGGER: &str = "développement";

/// What a workflow step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    Analysis,
    Development,
    Content,
    Conversion,
    Validation,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Analysis => "analysis",
            StepAction::Development => "development",
            StepAction::Content => "content",
            StepAction::Conversion => "conversion",
            StepAction::Validation => "validation",
        }
    }

    /// Human-readable label written into plans and briefs.
    pub fn label(&self) -> &'static str {
        match self {
            StepAction::Analysis => "analysis and strategic planning",
            StepAction::Development => "technical development",
            StepAction::Content => "content creation",
            StepAction::Conversion => "conversion optimization",
            StepAction::Validation => "final validation and quality review",
        }
    }
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One unit of an orchestration plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// 1-based position in the workflow
    pub step: u32,
    pub agent_id: AgentId,
    pub action: StepAction,
    /// Step numbers that must finish first; always lower than `step`
    pub dependencies: Vec<u32>,
    pub estimated_minutes: u32,
    pub critical: bool,
}

/// Build the workflow for `agents` (rank order, best first).
pub fn build_workflow(agents: &[AgentProfile], objective: &str) -> Vec<WorkflowStep> {
    let mut builder = WorkflowBuilder::default();

    let analyst = agents.iter().find(|a| a.has_any_specialty(ANALYSIS_TAGS));
    let analysis_step = analyst.map(|a| builder.push(a, StepAction::Analysis, Vec::new(), true));
    let after_analysis: Vec<u32> = analysis_step.into_iter().collect();

    if objective.to_lowercase().contains(DEVELOPMENT_TRIGGER)
        && let Some(developer) = agents.iter().find(|a| a.has_any_specialty(DEVELOPMENT_TAGS))
    {
        builder.push(developer, StepAction::Development, after_analysis.clone(), true);
    }

    let content_step = agents
        .iter()
        .find(|a| a.has_any_specialty(CONTENT_TAGS))
        .map(|writer| builder.push(writer, StepAction::Content, after_analysis.clone(), false));

    if let Some(closer) = agents.iter().find(|a| a.has_any_specialty(CONVERSION_TAGS)) {
        let dependencies = after_analysis.iter().copied().chain(content_step).collect();
        builder.push(closer, StepAction::Conversion, dependencies, false);
    }

    if let Some(first) = analyst
        && let Some(reviewer) = agents
            .iter()
            .find(|a| a.id != first.id && a.has_any_specialty(REVIEW_TAGS))
    {
        let dependencies = builder.step_numbers();
        builder.push(reviewer, StepAction::Validation, dependencies, true);
    }

    builder.steps
}

/// Check that every dependency points to an earlier step of the same workflow.
pub fn validate_workflow(steps: &[WorkflowStep]) -> Result<(), DomainError> {
    for (index, step) in steps.iter().enumerate() {
        let expected = index as u32 + 1;
        if step.step != expected {
            return Err(DomainError::InvalidWorkflow(format!(
                "step at position {} is numbered {}",
                expected, step.step
            )));
        }
        if let Some(bad) = step.dependencies.iter().find(|d| **d == 0 || **d >= step.step) {
            return Err(DomainError::InvalidWorkflow(format!(
                "step {} depends on step {}",
                step.step, bad
            )));
        }
    }
    Ok(())
}

#[derive(Default)]
struct WorkflowBuilder {
    steps: Vec<WorkflowStep>,
}

impl WorkflowBuilder {
    fn push(
        &mut self,
        agent: &AgentProfile,
        action: StepAction,
        dependencies: Vec<u32>,
        critical: bool,
    ) -> u32 {
        let step = self.steps.len() as u32 + 1;
        self.steps.push(WorkflowStep {
            step,
            agent_id: agent.id.clone(),
            action,
            dependencies,
            estimated_minutes: agent.estimated_minutes,
            critical,
        });
        step
    }

    fn step_numbers(&self) -> Vec<u32> {
        self.steps.iter().map(|s| s.step).collect()
    }
}
