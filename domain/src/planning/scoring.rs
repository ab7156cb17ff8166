//! Agent scoring and selection

use super::policy::{MAX_TEAM_SIZE, PlanningPolicy};
use crate::agent::{AgentId, AgentProfile, AgentRegistry};
use crate::mission::{Priority, RequirementCategory, RequirementVector};
use serde::{Deserialize, Serialize};

/// Score of one registry agent for one mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentScore {
    pub agent_id: AgentId,
    pub score: f64,
}

/// Weighted fit of a single agent.
///
/// `Σ requirement[category(specialty)] × perf/100 + perf/10`, plus the
/// availability bonus and, on critical missions, the advanced-tier bonus.
/// Never below zero.
pub fn score_agent(
    agent: &AgentProfile,
    requirements: &RequirementVector,
    priority: Priority,
    policy: &PlanningPolicy,
) -> f64 {
    let performance = f64::from(agent.performance);

    let fit: f64 = agent
        .specialties
        .iter()
        .map(|tag| requirements.weight(RequirementCategory::for_specialty(tag)) * performance / 100.0)
        .sum();

    let mut score = fit + performance / 10.0;
    if agent.available {
        score += policy.availability_bonus;
    }
    if priority.is_critical() && agent.is_advanced() {
        score += policy.critical_advanced_bonus;
    }
    score.max(0.0)
}

/// Score every agent and sort descending; ties keep registry order.
pub fn rank_agents(
    registry: &AgentRegistry,
    requirements: &RequirementVector,
    priority: Priority,
    policy: &PlanningPolicy,
) -> Vec<AgentScore> {
    let mut scores: Vec<AgentScore> = registry
        .iter()
        .map(|agent| AgentScore {
            agent_id: agent.id.clone(),
            score: score_agent(agent, requirements, priority, policy),
        })
        .collect();

    // sort_by is stable
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Top `max_agents` positively-scored agents, in rank order, never more
/// than [`MAX_TEAM_SIZE`].
pub fn select_agents(
    registry: &AgentRegistry,
    ranked: &[AgentScore],
    max_agents: usize,
) -> Vec<AgentProfile> {
    ranked
        .iter()
        .filter(|s| s.score > 0.0)
        .filter_map(|s| registry.get(&s.agent_id))
        .take(max_agents.min(MAX_TEAM_SIZE))
        .cloned()
        .collect()
}
