//! Planning domain module
//!
//! Everything between a [`MissionBrief`](crate::mission::MissionBrief) and an
//! [`OrchestrationPlan`]:
//!
//! 1. [`RequirementVector`](crate::mission::RequirementVector) extraction
//! 2. [`scoring`] of every registry agent and top-N selection
//! 3. [`workflow`] construction from the roles present in the selection
//! 4. [`assessment`] of duration, confidence, risks and alternative teams

pub mod assessment;
pub mod plan;
pub mod planner;
pub mod policy;
pub mod scoring;
pub mod stage;
pub mod workflow;

pub use plan::{AlternativeKind, AlternativeTeam, OrchestrationPlan};
pub use planner::MissionPlanner;
pub use policy::{MAX_TEAM_SIZE, PlanningPolicy};
pub use scoring::AgentScore;
pub use stage::PlanningStage;
pub use workflow::{StepAction, WorkflowStep};
