//! Execution domain module
//!
//! Turning a plan into per-agent briefs ready to be queued.

pub mod brief_document;

pub use brief_document::{AgentBrief, BriefStatus};
