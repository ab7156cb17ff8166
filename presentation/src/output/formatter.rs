//! Output formatter trait

use mission_application::OrchestrateMissionOutput;
use mission_domain::OutputFormat;

/// Trait for formatting orchestration results
pub trait OutputFormatter {
    /// Format the complete plan
    fn format_full(&self, output: &OrchestrateMissionOutput) -> String;

    /// Format the team, workflow and recommendations only
    fn format_summary(&self, output: &OrchestrateMissionOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &OrchestrateMissionOutput) -> String;

    fn format(&self, output: &OrchestrateMissionOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(output),
            OutputFormat::Summary => self.format_summary(output),
            OutputFormat::Json => self.format_json(output),
        }
    }
}
