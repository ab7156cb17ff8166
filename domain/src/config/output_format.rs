//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full plan with scores, workflow, risks and alternatives
    Full,
    /// Selected agents, workflow and recommendations (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
