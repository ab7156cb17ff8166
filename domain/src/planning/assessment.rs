//! Plan metrics, risks, alternative teams and recommendations.

use super::plan::{AlternativeKind, AlternativeTeam, OrchestrationPlan};
use super::policy::PlanningPolicy;
use super::workflow::WorkflowStep;
use crate::agent::{AgentProfile, AgentRegistry};
use crate::mission::Priority;
use chrono::{DateTime, Utc};

/// Sum of step durations, in minutes.
pub fn total_duration(workflow: &[WorkflowStep]) -> u32 {
    workflow.iter().map(|s| s.estimated_minutes).sum()
}

/// `min(100, mean performance + per-step bonus × steps)`, never negative.
///
/// The mean of an empty selection is 0.
pub fn confidence(agents: &[AgentProfile], step_count: usize, policy: &PlanningPolicy) -> f64 {
    let mean = if agents.is_empty() {
        0.0
    } else {
        agents.iter().map(|a| f64::from(a.performance)).sum::<f64>() / agents.len() as f64
    };
    (mean + policy.confidence_per_step * step_count as f64).clamp(0.0, 100.0)
}

/// Free-text risks, in a fixed order: deadline, critical path, weak agents,
/// unavailable agents.
pub fn identify_risks(
    agents: &[AgentProfile],
    workflow: &[WorkflowStep],
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    policy: &PlanningPolicy,
) -> Vec<String> {
    let mut risks = Vec::new();

    if let Some(deadline) = deadline {
        let needed_secs = i64::from(total_duration(workflow)) * 60;
        let remaining_secs = (deadline - now).num_seconds();
        if needed_secs > remaining_secs {
            risks.push(format!(
                "Insufficient time: the workflow needs {} min but only {} min remain before the deadline",
                needed_secs / 60,
                remaining_secs.max(0) / 60
            ));
        }
    }

    let critical = workflow.iter().filter(|s| s.critical).count();
    if critical > policy.max_critical_steps {
        risks.push(format!(
            "Tight critical path: {} steps are critical, any delay pushes the whole mission",
            critical
        ));
    }

    let weak: Vec<&str> = agents
        .iter()
        .filter(|a| a.performance < policy.min_agent_performance)
        .map(|a| a.name.as_str())
        .collect();
    if !weak.is_empty() {
        risks.push(format!(
            "Performance below {}: {}",
            policy.min_agent_performance,
            weak.join(", ")
        ));
    }

    let unavailable: Vec<&str> = agents
        .iter()
        .filter(|a| !a.available)
        .map(|a| a.name.as_str())
        .collect();
    if !unavailable.is_empty() {
        risks.push(format!(
            "Agents currently unavailable: {}",
            unavailable.join(", ")
        ));
    }

    risks
}

/// Up to two fallback teams; neither is scored.
pub fn alternatives(
    selected: &[AgentProfile],
    registry: &AgentRegistry,
    policy: &PlanningPolicy,
) -> Vec<AlternativeTeam> {
    let mut teams = Vec::new();

    let compact: Vec<_> = selected
        .iter()
        .take(policy.compact_team_size)
        .map(|a| a.id.clone())
        .collect();
    if !compact.is_empty() {
        teams.push(AlternativeTeam::new(AlternativeKind::Compact, compact));
    }

    let expert: Vec<_> = registry
        .iter()
        .filter(|a| a.is_advanced() && a.performance > policy.expert_performance_floor)
        .take(policy.expert_team_size)
        .map(|a| a.id.clone())
        .collect();
    if !expert.is_empty() {
        teams.push(AlternativeTeam::new(AlternativeKind::Expert, expert));
    }

    teams
}

/// Threshold-based advice shown next to a plan.
pub fn recommendations(
    plan: &OrchestrationPlan,
    priority: Priority,
    policy: &PlanningPolicy,
) -> Vec<String> {
    let mut advice = Vec::new();

    if plan.estimated_duration > policy.long_mission_minutes {
        advice.push(format!(
            "Long mission ({} min): split it into milestones and review after each one",
            plan.estimated_duration
        ));
    }
    if plan.confidence < policy.low_confidence {
        advice.push(
            "Low confidence: add context to the brief so agents can be matched more precisely"
                .to_string(),
        );
    }
    if plan.risks.len() > policy.many_risks {
        advice.push("Several risks detected: address them before launching execution".to_string());
    }
    if priority.is_critical() {
        advice.push(
            "Critical priority: schedule a checkpoint after every critical step".to_string(),
        );
    }
    if advice.is_empty() {
        advice.push("Plan looks solid: ready for execution".to_string());
    }

    advice
}
