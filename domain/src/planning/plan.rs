//! Orchestration plan aggregate

use super::scoring::AgentScore;
use super::workflow::WorkflowStep;
use crate::agent::{AgentId, AgentProfile};
use crate::mission::{MissionId, RequirementVector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why an alternative team was proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeKind {
    /// The top of the selection only
    Compact,
    /// Best advanced agents of the whole registry
    Expert,
}

impl AlternativeKind {
    pub fn description(&self) -> &'static str {
        match self {
            AlternativeKind::Compact => "compact team from the top of the selection",
            AlternativeKind::Expert => "expert team of the strongest advanced agents",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeTeam {
    pub kind: AlternativeKind,
    pub agents: Vec<AgentId>,
}

impl AlternativeTeam {
    pub fn new(kind: AlternativeKind, agents: Vec<AgentId>) -> Self {
        Self { kind, agents }
    }
}

/// Result of planning one mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationPlan {
    pub mission_id: MissionId,
    /// Selected agents, best first
    pub agents: Vec<AgentProfile>,
    /// Score of every registry agent, best first
    pub scores: Vec<AgentScore>,
    pub requirements: RequirementVector,
    pub workflow: Vec<WorkflowStep>,
    /// Minutes, sum of step durations
    pub estimated_duration: u32,
    /// In `[0, 100]`
    pub confidence: f64,
    pub risks: Vec<String>,
    pub alternatives: Vec<AlternativeTeam>,
    pub created_at: DateTime<Utc>,
}

impl OrchestrationPlan {
    pub fn agent(&self, id: &AgentId) -> Option<&AgentProfile> {
        self.agents.iter().find(|a| &a.id == id)
    }

    pub fn critical_steps(&self) -> impl Iterator<Item = &WorkflowStep> {
        self.workflow.iter().filter(|s| s.critical)
    }

    pub fn score_of(&self, id: &AgentId) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| &s.agent_id == id)
            .map(|s| s.score)
    }
}
