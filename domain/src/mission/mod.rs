//! Mission domain module
//!
//! The caller's brief, its priority, and the requirement vector derived from it.

pub mod brief;
pub mod priority;
pub mod requirements;
pub mod status;

pub use brief::{MissionBrief, MissionId};
pub use priority::Priority;
pub use requirements::{KeywordMatching, RequirementCategory, RequirementVector};
pub use status::MissionStatus;
