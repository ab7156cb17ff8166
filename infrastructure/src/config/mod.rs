//! Configuration file loading for the mission orchestrator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MISSION_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mission.toml` or `./.mission.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mission-orchestrator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileStorageConfig,
    StorageBackend,
};
pub use loader::ConfigLoader;
