//! Record store configuration (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which record store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Records live for the duration of the process
    #[default]
    Memory,
    /// Append-only JSON lines file
    Jsonl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: StorageBackend,
    /// Record file for the `jsonl` backend
    pub path: Option<PathBuf>,
}
