//! Agent persona value objects.
//!
//! An [`AgentProfile`] is static configuration: a named role with a fixed
//! set of specialty tags, a complexity tier and a hand-assigned performance
//! score. Profiles are never mutated once a registry is built.

use serde::{Deserialize, Serialize};

/// Identifier of an agent persona (e.g. `"karine-ai"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an AgentId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for AgentId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How demanding the missions an agent can take on are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl ComplexityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Basic => "basic",
            ComplexityTier::Intermediate => "intermediate",
            ComplexityTier::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A static agent persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: AgentId,
    /// Display name (e.g. "KarineAI")
    pub name: String,
    pub description: String,
    /// Lower-case specialty tags, in declaration order
    pub specialties: Vec<String>,
    pub complexity: ComplexityTier,
    /// Hand-assigned score in `0..=100`
    pub performance: u8,
    pub available: bool,
    /// Nominal time for one workflow step, in minutes
    pub estimated_minutes: u32,
}

impl AgentProfile {
    pub fn new(
        id: impl Into<AgentId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            specialties: Vec::new(),
            complexity: ComplexityTier::default(),
            performance: 0,
            available: true,
            estimated_minutes: 0,
        }
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_complexity(mut self, complexity: ComplexityTier) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_performance(mut self, performance: u8) -> Self {
        self.performance = performance;
        self
    }

    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = minutes;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Whether any of the given tags appears among this agent's specialties.
    pub fn has_any_specialty(&self, tags: &[&str]) -> bool {
        self.specialties
            .iter()
            .any(|s| tags.iter().any(|t| s.as_str() == *t))
    }

    pub fn is_advanced(&self) -> bool {
        self.complexity == ComplexityTier::Advanced
    }
}
