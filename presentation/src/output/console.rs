//! Console output formatter for orchestration results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use mission_application::{
    OrchestrateError, OrchestrateMissionOutput, OrchestrationResponse, QueuedBrief,
};
use mission_domain::{AgentRegistry, MissionId, OrchestrationPlan, WorkflowStep};

/// Formats orchestration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the complete plan
    pub fn format_full(output: &OrchestrateMissionOutput) -> String {
        let plan = &output.plan;
        let mut out = String::new();

        out.push_str(&Self::header("Mission Orchestration Plan"));
        out.push('\n');
        out.push_str(&Self::overview(plan));

        // Requirements
        out.push_str(&Self::section_header("Requirements"));
        if plan.requirements.is_zero() {
            out.push_str(&format!("  {}\n", "no category keywords found".dimmed()));
        }
        for (category, weight) in plan.requirements.iter().filter(|(_, w)| *w > 0.0) {
            out.push_str(&format!("  {:<14} {:>6.2}\n", category.as_str(), weight));
        }

        // Scores
        out.push_str(&Self::section_header("Agent Scores"));
        for score in &plan.scores {
            let selected = plan.agent(&score.agent_id).is_some();
            let line = format!("  {:<12} {:>7.2}", score.agent_id.as_str(), score.score);
            if selected {
                out.push_str(&format!("{} {}\n", line.green(), "selected".green().bold()));
            } else {
                out.push_str(&format!("{}\n", line.dimmed()));
            }
        }

        out.push_str(&Self::section_header("Workflow"));
        out.push_str(&Self::workflow(plan));

        out.push_str(&Self::section_header("Risks"));
        if plan.risks.is_empty() {
            out.push_str(&format!("  {}\n", "none identified".green()));
        }
        for risk in &plan.risks {
            out.push_str(&format!("  {} {}\n", "!".yellow().bold(), risk));
        }

        if !plan.alternatives.is_empty() {
            out.push_str(&Self::section_header("Alternative Teams"));
            for alternative in &plan.alternatives {
                let members = alternative
                    .agents
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "  {} {}\n",
                    format!("{}:", alternative.kind.description()).cyan(),
                    members
                ));
            }
        }

        out.push_str(&Self::section_header("Recommendations"));
        out.push_str(&Self::recommendations(&output.recommendations));

        if !output.persisted() {
            out.push_str(&format!(
                "\n{}\n",
                "Plan was not persisted (see logs)".yellow()
            ));
        }

        out.push_str(&Self::footer());
        out
    }

    /// Format the team, workflow and recommendations only
    pub fn format_summary(output: &OrchestrateMissionOutput) -> String {
        let plan = &output.plan;
        let mut out = String::new();

        out.push_str(&format!("{}\n\n", "=== Mission Plan ===".cyan().bold()));
        out.push_str(&Self::overview(plan));
        out.push('\n');
        out.push_str(&Self::workflow(plan));
        out.push('\n');
        out.push_str(&Self::recommendations(&output.recommendations));
        out
    }

    /// Format as JSON in the `{success, plan, recommendations}` shape
    pub fn format_json(output: &OrchestrateMissionOutput) -> String {
        let response = OrchestrationResponse::from(Ok::<_, OrchestrateError>(output.clone()));
        Self::format_response_json(&response)
    }

    pub fn format_response_json(response: &OrchestrationResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the agent registry as a table
    pub fn format_agents(registry: &AgentRegistry) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}\n",
            format!(
                "{:<12} {:<10} {:<13} {:>5} {:>6}  {}",
                "ID", "NAME", "COMPLEXITY", "PERF", "MIN", "SPECIALTIES"
            )
            .bold()
        ));
        for agent in registry.iter() {
            let line = format!(
                "{:<12} {:<10} {:<13} {:>5} {:>6}  {}",
                agent.id.as_str(),
                agent.name,
                agent.complexity.to_string(),
                agent.performance,
                agent.estimated_minutes,
                agent.specialties.join(", ")
            );
            if agent.available {
                out.push_str(&format!("{}\n", line));
            } else {
                out.push_str(&format!("{} {}\n", line.dimmed(), "(unavailable)".red()));
            }
        }
        out
    }

    pub fn format_agents_json(registry: &AgentRegistry) -> String {
        let agents: Vec<_> = registry.iter().collect();
        serde_json::to_string_pretty(&agents).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format stored briefs, one block per step
    pub fn format_briefs(mission_id: &MissionId, briefs: &[QueuedBrief]) -> String {
        if briefs.is_empty() {
            return format!("No briefs stored for mission {}\n", mission_id);
        }

        let mut out = String::new();
        out.push_str(&Self::header(&format!("Briefs for {}", mission_id)));
        out.push('\n');
        for queued in briefs {
            out.push_str(&format!(
                "\n{} {}\n",
                format!(
                    "── Step {} · {} · {} ──",
                    queued.brief.step, queued.brief.agent_name, queued.status
                )
                .yellow()
                .bold(),
                queued.record_id.dimmed()
            ));
            out.push_str(&Self::indent(&queued.brief.document, "  "));
            out.push('\n');
        }
        out.push_str(&Self::footer());
        out
    }

    pub fn format_briefs_json(briefs: &[QueuedBrief]) -> String {
        let value: Vec<_> = briefs
            .iter()
            .map(|q| {
                serde_json::json!({
                    "record_id": q.record_id,
                    "status": q.status,
                    "brief": q.brief,
                })
            })
            .collect();
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "[]".to_string())
    }

    /// One-line outcome of a plan execution
    pub fn format_execution(mission_id: &MissionId, executed: bool, queued: usize) -> String {
        if executed {
            format!(
                "{} mission {} orchestrated, {} brief(s) queued",
                "v".green(),
                mission_id,
                queued
            )
        } else {
            format!(
                "{} execution of mission {} failed after {} brief(s) (see logs)",
                "x".red(),
                mission_id,
                queued
            )
        }
    }

    fn overview(plan: &OrchestrationPlan) -> String {
        let team = if plan.agents.is_empty() {
            "no agent selected".to_string()
        } else {
            plan.agents
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{} {}\n{} {}\n{} {} min\n{} {:.0}%\n",
            "Mission:".cyan().bold(),
            plan.mission_id,
            "Team:".cyan().bold(),
            team,
            "Duration:".cyan().bold(),
            plan.estimated_duration,
            "Confidence:".cyan().bold(),
            plan.confidence
        )
    }

    fn workflow(plan: &OrchestrationPlan) -> String {
        if plan.workflow.is_empty() {
            return format!("  {}\n", "empty workflow".dimmed());
        }
        plan.workflow
            .iter()
            .map(|step| Self::step_line(plan, step))
            .collect()
    }

    fn step_line(plan: &OrchestrationPlan, step: &WorkflowStep) -> String {
        let name = plan
            .agent(&step.agent_id)
            .map(|a| a.name.as_str())
            .unwrap_or(step.agent_id.as_str());
        let mut line = format!(
            "  {}. {}: {} ({} min)",
            step.step,
            name.bold(),
            step.action.label(),
            step.estimated_minutes
        );
        if !step.dependencies.is_empty() {
            let after = step
                .dependencies
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!(" after {}", after));
        }
        if step.critical {
            line.push_str(&format!(" {}", "[critical]".red()));
        }
        line.push('\n');
        line
    }

    fn recommendations(recommendations: &[String]) -> String {
        recommendations
            .iter()
            .map(|r| format!("  {} {}\n", "*".cyan(), r))
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, output: &OrchestrateMissionOutput) -> String {
        Self::format_full(output)
    }

    fn format_summary(&self, output: &OrchestrateMissionOutput) -> String {
        Self::format_summary(output)
    }

    fn format_json(&self, output: &OrchestrateMissionOutput) -> String {
        Self::format_json(output)
    }
}
