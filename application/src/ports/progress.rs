//! Progress notification port
//!
//! Defines the interface for reporting progress during orchestration.

use mission_domain::{AgentBrief, PlanningStage};

/// Callback for progress updates during orchestration and execution
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a planning stage starts
    fn on_stage_start(&self, stage: &PlanningStage);

    /// Called when a planning stage completes
    fn on_stage_complete(&self, stage: &PlanningStage);

    /// Called after a brief has been written to the store
    fn on_brief_queued(&self, _brief: &AgentBrief) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &PlanningStage) {}
    fn on_stage_complete(&self, _stage: &PlanningStage) {}
}
