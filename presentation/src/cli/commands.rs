//! CLI command definitions

use chrono::{DateTime, Duration, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mission_domain::{MissionBrief, Priority};
use std::path::PathBuf;

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scores, workflow, risks, alternatives and recommendations
    Full,
    /// Team, workflow and recommendations
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for mission_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => mission_domain::OutputFormat::Full,
            OutputFormat::Summary => mission_domain::OutputFormat::Summary,
            OutputFormat::Json => mission_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for mission-orchestrator
#[derive(Parser, Debug)]
#[command(name = "mission-orchestrator")]
#[command(author, version, about = "Plan missions across a team of specialised AI agents")]
#[command(long_about = r#"
Mission Orchestrator turns a mission brief into an execution plan.

Planning runs four stages:
1. Requirement extraction: keyword weights per category, scaled by priority
2. Agent selection: every agent is scored, the best four are kept
3. Workflow construction: analysis, optional specialist steps, validation
4. Risk assessment: duration, confidence, risks and alternative teams

Configuration files are loaded from (in priority order):
1. MISSION_* environment variables
2. --config <path>     Explicit config file
3. ./mission.toml      Project-level config
4. ~/.config/mission-orchestrator/config.toml   Global config

Example:
  mission-orchestrator plan --objective "Créer une stratégie marketing" --priority high
  mission-orchestrator run --objective "Lancer un produit" --deadline-in 240
  mission-orchestrator briefs 6f1c0f0e-7d4e-4b8e-9a57-1f0c3b2d9e11
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then summary)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a mission and print the plan
    Plan(BriefArgs),
    /// Register, plan and execute a mission, queueing one brief per step
    Run(BriefArgs),
    /// List the agent registry
    Agents,
    /// List the briefs stored for a mission
    Briefs {
        /// Mission identifier
        mission_id: String,
    },
}

/// Mission brief given on the command line
#[derive(Args, Debug, Clone)]
pub struct BriefArgs {
    /// What the mission should achieve
    #[arg(long)]
    pub objective: String,

    /// Free-form background
    #[arg(long)]
    pub context: Option<String>,

    /// low, medium, high or critical (anything else counts as medium)
    #[arg(short, long, default_value = "medium")]
    pub priority: String,

    /// Deadline as an RFC 3339 timestamp
    #[arg(long, value_parser = parse_deadline, conflicts_with = "deadline_in")]
    pub deadline: Option<DateTime<Utc>>,

    /// Deadline as minutes from now
    #[arg(long, value_name = "MINUTES")]
    pub deadline_in: Option<u32>,

    #[arg(long)]
    pub budget: Option<f64>,

    /// Constraint (can be specified multiple times)
    #[arg(long = "constraint", value_name = "TEXT")]
    pub constraints: Vec<String>,

    /// Mission identifier (generated when absent)
    #[arg(long)]
    pub mission_id: Option<String>,
}

impl BriefArgs {
    /// Build the domain brief; relative deadlines are anchored at `now`.
    pub fn to_brief(&self, now: DateTime<Utc>) -> MissionBrief {
        // Priority parsing is infallible
        let priority: Priority = self.priority.parse().unwrap_or_default();
        let mut brief = MissionBrief::new(self.objective.clone()).with_priority(priority);

        if let Some(context) = &self.context {
            brief = brief.with_context(context.clone());
        }
        let deadline = self
            .deadline
            .or_else(|| self.deadline_in.map(|m| now + Duration::minutes(i64::from(m))));
        if let Some(deadline) = deadline {
            brief = brief.with_deadline(deadline);
        }
        if let Some(budget) = self.budget {
            brief = brief.with_budget(budget);
        }
        for constraint in &self.constraints {
            brief = brief.with_constraint(constraint.clone());
        }
        brief
    }
}

fn parse_deadline(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp such as 2025-03-01T18:00:00Z ({e})"))
}
