//! Tunable constants of the planning pipeline.
//!
//! Defaults reproduce the heuristics the orchestrator has always used; the
//! `[planning]` section of the configuration file can override any of them.

use crate::mission::requirements::KeywordMatching;
use serde::{Deserialize, Serialize};

/// Hard ceiling on the selected team, whatever `max_agents` says.
pub const MAX_TEAM_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningPolicy {
    // ==================== Requirement extraction ====================
    /// Weight added per matching keyword
    pub keyword_weight: f64,
    pub keyword_matching: KeywordMatching,

    // ==================== Agent selection ====================
    /// Requested team size; capped at [`MAX_TEAM_SIZE`]
    pub max_agents: usize,
    pub availability_bonus: f64,
    /// Bonus for advanced agents on critical missions
    pub critical_advanced_bonus: f64,

    // ==================== Metrics ====================
    pub confidence_per_step: f64,

    // ==================== Risks ====================
    /// Selected agents scoring below this are flagged
    pub min_agent_performance: u8,
    /// More critical steps than this are flagged
    pub max_critical_steps: usize,

    // ==================== Alternatives ====================
    pub compact_team_size: usize,
    /// Expert alternatives need performance strictly above this
    pub expert_performance_floor: u8,
    pub expert_team_size: usize,

    // ==================== Recommendations ====================
    pub long_mission_minutes: u32,
    pub low_confidence: f64,
    pub many_risks: usize,
}

impl Default for PlanningPolicy {
    fn default() -> Self {
        Self {
            keyword_weight: 3.0,
            keyword_matching: KeywordMatching::Substring,
            max_agents: MAX_TEAM_SIZE,
            availability_bonus: 10.0,
            critical_advanced_bonus: 20.0,
            confidence_per_step: 5.0,
            min_agent_performance: 80,
            max_critical_steps: 2,
            compact_team_size: 2,
            expert_performance_floor: 85,
            expert_team_size: 3,
            long_mission_minutes: 120,
            low_confidence: 80.0,
            many_risks: 2,
        }
    }
}

impl PlanningPolicy {
    pub fn with_keyword_matching(mut self, matching: KeywordMatching) -> Self {
        self.keyword_matching = matching;
        self
    }

    pub fn with_max_agents(mut self, max_agents: usize) -> Self {
        self.max_agents = max_agents;
        self
    }

    /// Number of agents selection may keep.
    pub fn team_size(&self) -> usize {
        self.max_agents.min(MAX_TEAM_SIZE)
    }
}
