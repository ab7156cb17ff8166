//! Read-only registry of agent personas.

use super::profile::{AgentId, AgentProfile, ComplexityTier};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Ordered, immutable set of agent profiles.
///
/// Iteration order is insertion order; score ties during selection are
/// broken by it.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<AgentProfile>,
}

impl AgentRegistry {
    /// Build a registry, rejecting empty ids, duplicate ids and
    /// performance scores above 100.
    pub fn new(agents: Vec<AgentProfile>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for agent in &agents {
            if agent.id.as_str().trim().is_empty() {
                return Err(DomainError::InvalidAgent(format!(
                    "agent '{}' has an empty id",
                    agent.name
                )));
            }
            if agent.performance > 100 {
                return Err(DomainError::InvalidAgent(format!(
                    "{}: performance {} is above 100",
                    agent.id, agent.performance
                )));
            }
            if !seen.insert(agent.id.clone()) {
                return Err(DomainError::DuplicateAgent(agent.id.to_string()));
            }
        }
        Ok(Self { agents })
    }

    /// The six built-in personas.
    pub fn builtin() -> Self {
        Self {
            agents: builtin_agents(),
        }
    }

    pub fn get(&self, id: &AgentId) -> Option<&AgentProfile> {
        self.agents.iter().find(|a| &a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentProfile> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_agents() -> Vec<AgentProfile> {
    vec![
        AgentProfile::new(
            "karine-ai",
            "KarineAI",
            "Senior marketing strategist: positioning, acquisition campaigns and go-to-market plans",
        )
        .with_specialties(["marketing", "stratégie", "analyse"])
        .with_complexity(ComplexityTier::Advanced)
        .with_performance(92)
        .with_estimated_minutes(45),
        AgentProfile::new(
            "lucas-ai",
            "LucasAI",
            "Technical architect: web development, integrations and automation",
        )
        .with_specialties(["développement", "technique", "automatisation"])
        .with_complexity(ComplexityTier::Advanced)
        .with_performance(90)
        .with_estimated_minutes(90),
        AgentProfile::new(
            "clara-ai",
            "ClaraAI",
            "Copywriter: editorial content, newsletters and SEO articles",
        )
        .with_specialties(["contenu", "rédaction", "seo"])
        .with_complexity(ComplexityTier::Intermediate)
        .with_performance(88)
        .with_estimated_minutes(30),
        AgentProfile::new(
            "maxime-ai",
            "MaximeAI",
            "Conversion specialist: sales funnels, landing pages and offer optimization",
        )
        .with_specialties(["conversion", "vente", "optimisation"])
        .with_complexity(ComplexityTier::Intermediate)
        .with_performance(86)
        .with_estimated_minutes(40),
        AgentProfile::new(
            "sophie-ai",
            "SophieAI",
            "Data analyst: market studies, KPI tracking and reporting",
        )
        .with_specialties(["analyse", "données", "reporting"])
        .with_complexity(ComplexityTier::Advanced)
        .with_performance(89)
        .with_estimated_minutes(35),
        AgentProfile::new(
            "thomas-ai",
            "ThomasAI",
            "Productivity coach: team organization and planning",
        )
        .with_specialties(["productivité", "organisation", "planification"])
        .with_complexity(ComplexityTier::Basic)
        .with_performance(78)
        .with_estimated_minutes(25)
        .unavailable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_agents_in_order() {
        let registry = AgentRegistry::builtin();
        let ids: Vec<&str> = registry.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "karine-ai",
                "lucas-ai",
                "clara-ai",
                "maxime-ai",
                "sophie-ai",
                "thomas-ai"
            ]
        );
    }

    #[test]
    fn test_builtin_passes_validation() {
        let agents: Vec<_> = AgentRegistry::builtin().iter().cloned().collect();
        assert!(AgentRegistry::new(agents).is_ok());
    }

    #[test]
    fn test_get_by_id() {
        let registry = AgentRegistry::builtin();
        let karine = registry.get(&AgentId::new("karine-ai")).unwrap();
        assert_eq!(karine.performance, 92);
        assert!(karine.has_any_specialty(&["marketing"]));
        assert!(registry.get(&AgentId::new("nobody")).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let agent = AgentProfile::new("a", "A", "").with_performance(50);
        let err = AgentRegistry::new(vec![agent.clone(), agent]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateAgent("a".to_string()));
    }

    #[test]
    fn test_rejects_performance_above_100() {
        let agent = AgentProfile::new("a", "A", "").with_performance(101);
        assert!(matches!(
            AgentRegistry::new(vec![agent]),
            Err(DomainError::InvalidAgent(_))
        ));
    }

    #[test]
    fn test_rejects_empty_id() {
        let agent = AgentProfile::new("  ", "Blank", "");
        assert!(AgentRegistry::new(vec![agent]).is_err());
    }

    #[test]
    fn test_empty_registry_is_allowed() {
        let registry = AgentRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
