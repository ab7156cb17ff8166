//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod orchestration_logger;
pub mod progress;
pub mod record_store;
