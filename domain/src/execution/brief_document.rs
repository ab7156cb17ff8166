//! Per-step agent briefs generated when a plan is executed

use crate::agent::{AgentId, AgentProfile};
use crate::mission::MissionId;
use crate::planning::{OrchestrationPlan, StepAction, WorkflowStep};
use serde::{Deserialize, Serialize};

/// Queue status of an agent brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefStatus {
    #[default]
    Queued,
}

impl BriefStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BriefStatus::Queued => "queued",
        }
    }
}

/// Instructional document handed to one agent for one workflow step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentBrief {
    pub mission_id: MissionId,
    pub step: u32,
    pub agent_id: AgentId,
    pub agent_name: String,
    pub action: StepAction,
    pub document: String,
    pub dependencies: Vec<u32>,
    pub estimated_minutes: u32,
    pub critical: bool,
    pub status: BriefStatus,
}

impl AgentBrief {
    /// Compose the brief for `step`, performed by `agent`.
    pub fn compose(plan: &OrchestrationPlan, step: &WorkflowStep, agent: &AgentProfile) -> Self {
        Self {
            mission_id: plan.mission_id.clone(),
            step: step.step,
            agent_id: agent.id.clone(),
            agent_name: agent.name.clone(),
            action: step.action,
            document: render_document(step, agent, plan.workflow.len()),
            dependencies: step.dependencies.clone(),
            estimated_minutes: step.estimated_minutes,
            critical: step.critical,
            status: BriefStatus::Queued,
        }
    }
}

fn render_document(step: &WorkflowStep, agent: &AgentProfile, total_steps: usize) -> String {
    let dependencies = if step.dependencies.is_empty() {
        "none, this step can start immediately".to_string()
    } else {
        step.dependencies
            .iter()
            .map(|d| format!("step {}", d))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let criticality = if step.critical {
        "This step is on the critical path: any delay postpones the whole mission."
    } else {
        "This step is not on the critical path."
    };

    format!(
        r#"# Brief for {name}: {label}

You are {name}, {description}.
Your specialties: {specialties}.

## Assignment
Step {step} of {total}: {label}.
Wait for: {dependencies}.
Estimated duration: {minutes} min.

{criticality}

## Deliverable
Produce the output of this step using your expertise, then hand it over to the next steps."#,
        name = agent.name,
        label = step.action.label(),
        description = agent.description,
        specialties = agent.specialties.join(", "),
        step = step.step,
        total = total_steps,
        dependencies = dependencies,
        minutes = step.estimated_minutes,
        criticality = criticality,
    )
}
