//! Domain layer for mission-orchestrator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! A fixed [`AgentRegistry`] of six personas, each with specialty tags,
//! a complexity tier and a performance score.
//!
//! ## Planning
//!
//! [`MissionPlanner`] maps a [`MissionBrief`] to an [`OrchestrationPlan`]:
//!
//! - **Requirements**: keyword scan of the brief, scaled by [`Priority`]
//! - **Selection**: weighted scores, top four agents
//! - **Workflow**: analysis → development → content → conversion → validation
//! - **Assessment**: duration, confidence, risks, alternative teams

pub mod agent;
pub mod config;
pub mod core;
pub mod execution;
pub mod mission;
pub mod planning;

// Re-export commonly used types
pub use agent::{AgentId, AgentProfile, AgentRegistry, ComplexityTier};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use execution::{AgentBrief, BriefStatus};
pub use mission::{
    KeywordMatching, MissionBrief, MissionId, MissionStatus, Priority, RequirementCategory,
    RequirementVector,
};
pub use planning::{
    AgentScore, AlternativeKind, AlternativeTeam, MAX_TEAM_SIZE, MissionPlanner, OrchestrationPlan,
    PlanningPolicy, PlanningStage, StepAction, WorkflowStep,
};
