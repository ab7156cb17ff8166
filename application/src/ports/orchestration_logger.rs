//! Port for structured orchestration event logging.
//!
//! Defines the [`OrchestrationLogger`] trait for recording what the
//! orchestrator decided and wrote (plans created, briefs queued, failed
//! writes) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port keeps an audit trail of
//! orchestration events (JSONL in the infrastructure adapter).

use serde_json::Value;

/// A structured orchestration event.
pub struct OrchestrationEvent {
    /// Event type identifier (e.g., "plan_created", "brief_queued").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl OrchestrationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging orchestration events.
///
/// `log` is synchronous and non-fallible: a failing sink must never
/// fail an orchestration.
pub trait OrchestrationLogger: Send + Sync {
    fn log(&self, event: OrchestrationEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoOrchestrationLogger;

impl OrchestrationLogger for NoOrchestrationLogger {
    fn log(&self, _event: OrchestrationEvent) {}
}
