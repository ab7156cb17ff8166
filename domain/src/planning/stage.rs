//! Stages of the planning pipeline

use serde::{Deserialize, Serialize};

/// Stage of a planning run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanningStage {
    /// Keyword scan of the brief into a requirement vector
    RequirementExtraction,
    /// Scoring and ranking of registry agents
    AgentSelection,
    /// Fixed-template workflow over the selected agents
    WorkflowConstruction,
    /// Metrics, risks and alternative teams
    RiskAssessment,
}

impl PlanningStage {
    pub const ALL: [PlanningStage; 4] = [
        PlanningStage::RequirementExtraction,
        PlanningStage::AgentSelection,
        PlanningStage::WorkflowConstruction,
        PlanningStage::RiskAssessment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PlanningStage::RequirementExtraction => "requirement_extraction",
            PlanningStage::AgentSelection => "agent_selection",
            PlanningStage::WorkflowConstruction => "workflow_construction",
            PlanningStage::RiskAssessment => "risk_assessment",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PlanningStage::RequirementExtraction => "Requirement Extraction",
            PlanningStage::AgentSelection => "Agent Selection",
            PlanningStage::WorkflowConstruction => "Workflow Construction",
            PlanningStage::RiskAssessment => "Risk Assessment",
        }
    }
}

impl std::fmt::Display for PlanningStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
