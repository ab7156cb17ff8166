//! Logging configuration (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSON diagnostic log written alongside stderr output
    pub file: Option<PathBuf>,
    /// JSONL orchestration event log
    pub events: Option<PathBuf>,
}
