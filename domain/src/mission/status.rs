//! Mission lifecycle status as recorded in external storage

use serde::{Deserialize, Serialize};

/// Status of a mission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    /// Registered, no plan executed yet
    #[default]
    Pending,
    /// A plan was executed and its briefs queued
    Orchestrated,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Pending => "pending",
            MissionStatus::Orchestrated => "orchestrated",
        }
    }
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
