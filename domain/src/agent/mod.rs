//! Agent domain module
//!
//! Contains the static agent personas and the registry they live in.

pub mod profile;
pub mod registry;

pub use profile::{AgentId, AgentProfile, ComplexityTier};
pub use registry::AgentRegistry;
