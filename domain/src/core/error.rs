//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid agent profile: {0}")]
    InvalidAgent(String),

    #[error("Duplicate agent id in registry: {0}")]
    DuplicateAgent(String),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Invalid workflow: {0}")]
    InvalidWorkflow(String),
}

impl DomainError {
    /// Check if this error comes from registry construction rather than planning
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidAgent(_) | DomainError::DuplicateAgent(_)
        )
    }
}
