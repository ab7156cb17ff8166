//! Logging infrastructure: structured orchestration event logging.
//!
//! Provides [`JsonlOrchestrationLogger`], a JSONL file writer that implements
//! the [`OrchestrationLogger`](mission_application::OrchestrationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlOrchestrationLogger;
