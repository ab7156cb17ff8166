//! Application layer for the mission orchestrator
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    orchestration_logger::{NoOrchestrationLogger, OrchestrationEvent, OrchestrationLogger},
    progress::{NoProgress, ProgressNotifier},
    record_store::{NewRecord, RecordFilter, RecordKind, RecordStore, StoreError, StoredRecord},
};
pub use use_cases::execute_plan::{ExecutePlanError, ExecutePlanUseCase, ExecutionReceipt};
pub use use_cases::mission_queries::{MissionQueries, QueuedBrief};
pub use use_cases::orchestrate_mission::{
    OrchestrateError, OrchestrateMissionInput, OrchestrateMissionOutput,
    OrchestrateMissionUseCase, OrchestrationResponse, PLAN_STATUS,
};
pub use use_cases::register_mission::{RegisterMissionError, RegisterMissionUseCase};
