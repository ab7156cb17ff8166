//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod storage;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use storage::{FileStorageConfig, StorageBackend};

use mission_domain::{MAX_TEAM_SIZE, PlanningPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("planning.keyword_weight cannot be negative (got {0})")]
    NegativeKeywordWeight(f64),

    #[error("planning.max_agents cannot be 0")]
    NoAgents,

    #[error("planning.max_agents cannot exceed {max} (got {0})", max = MAX_TEAM_SIZE)]
    TooManyAgents(usize),

    #[error("planning.{field} cannot be negative (got {value})")]
    NegativeBonus { field: &'static str, value: f64 },

    #[error("planning.{field} is a performance score and cannot exceed 100 (got {value})")]
    PerformanceOutOfRange { field: &'static str, value: u8 },

    #[error("storage.path is required for the jsonl backend")]
    MissingStoragePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Planning heuristics
    pub planning: PlanningPolicy,
    /// Record store selection
    pub storage: FileStorageConfig,
    pub logging: FileLoggingConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let planning = &self.planning;

        if planning.keyword_weight < 0.0 {
            issues.push(ConfigValidationError::NegativeKeywordWeight(
                planning.keyword_weight,
            ));
        }
        if planning.max_agents == 0 {
            issues.push(ConfigValidationError::NoAgents);
        }
        if planning.max_agents > MAX_TEAM_SIZE {
            issues.push(ConfigValidationError::TooManyAgents(planning.max_agents));
        }
        for (field, value) in [
            ("availability_bonus", planning.availability_bonus),
            ("critical_advanced_bonus", planning.critical_advanced_bonus),
        ] {
            if value < 0.0 {
                issues.push(ConfigValidationError::NegativeBonus { field, value });
            }
        }
        for (field, value) in [
            ("min_agent_performance", planning.min_agent_performance),
            ("expert_performance_floor", planning.expert_performance_floor),
        ] {
            if value > 100 {
                issues.push(ConfigValidationError::PerformanceOutOfRange { field, value });
            }
        }
        if self.storage.backend == StorageBackend::Jsonl && self.storage.path.is_none() {
            issues.push(ConfigValidationError::MissingStoragePath);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_domain::{KeywordMatching, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[planning]
keyword_weight = 2.5
keyword_matching = "whole_word"
max_agents = 3

[storage]
backend = "jsonl"
path = "records.jsonl"

[logging]
events = "events.jsonl"

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.planning.keyword_weight, 2.5);
        assert_eq!(config.planning.keyword_matching, KeywordMatching::WholeWord);
        assert_eq!(config.planning.max_agents, 3);
        // untouched planning fields keep their defaults
        assert_eq!(config.planning.availability_bonus, 10.0);
        assert_eq!(config.storage.backend, StorageBackend::Jsonl);
        assert!(config.logging.events.is_some());
        assert!(config.logging.file.is_none());
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.planning.keyword_weight = -1.0;
        config.planning.max_agents = 0;
        config.planning.min_agent_performance = 120;
        config.storage.backend = StorageBackend::Jsonl;

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::NegativeKeywordWeight(-1.0),
                ConfigValidationError::NoAgents,
                ConfigValidationError::PerformanceOutOfRange {
                    field: "min_agent_performance",
                    value: 120
                },
                ConfigValidationError::MissingStoragePath,
            ]
        );
    }

    #[test]
    fn test_validate_rejects_oversized_team_and_negative_bonuses() {
        let toml_str = r#"
[planning]
max_agents = 6
availability_bonus = -50.0
critical_advanced_bonus = -1.0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::TooManyAgents(6),
                ConfigValidationError::NegativeBonus {
                    field: "availability_bonus",
                    value: -50.0
                },
                ConfigValidationError::NegativeBonus {
                    field: "critical_advanced_bonus",
                    value: -1.0
                },
            ]
        );
    }
}
