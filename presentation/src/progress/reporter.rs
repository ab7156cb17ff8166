//! Progress reporting for mission orchestration

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use mission_application::ProgressNotifier;
use mission_domain::{AgentBrief, PlanningStage};
use std::sync::Mutex;

/// Reports planning progress with an indicatif bar
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn step_label(stage: &PlanningStage) -> String {
        let index = PlanningStage::ALL
            .iter()
            .position(|s| s == stage)
            .map_or(0, |i| i + 1);
        format!("Stage {}", index)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &PlanningStage) {
        let Ok(mut slot) = self.stage_bar.lock() else {
            return;
        };
        let pb = slot.get_or_insert_with(|| {
            let pb = self
                .multi
                .add(ProgressBar::new(PlanningStage::ALL.len() as u64));
            pb.set_style(Self::stage_style());
            pb.set_prefix("Planning");
            pb
        });
        pb.set_message(stage.display_name().to_string());
    }

    fn on_stage_complete(&self, stage: &PlanningStage) {
        let Ok(mut slot) = self.stage_bar.lock() else {
            return;
        };
        if let Some(pb) = slot.as_ref() {
            pb.inc(1);
            if pb.position() >= PlanningStage::ALL.len() as u64 {
                pb.finish_with_message(format!("{}", "plan ready".green()));
                *slot = None;
            } else {
                pb.set_message(format!("{} done", Self::step_label(stage)));
            }
        }
    }

    fn on_brief_queued(&self, brief: &AgentBrief) {
        let _ = self.multi.println(format!(
            "  {} brief queued: step {} for {}",
            "v".green(),
            brief.step,
            brief.agent_name
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &PlanningStage) {
        eprintln!("{} {}", "->".cyan(), stage.display_name().bold());
    }

    fn on_stage_complete(&self, _stage: &PlanningStage) {}

    fn on_brief_queued(&self, brief: &AgentBrief) {
        eprintln!(
            "  {} step {} queued for {}",
            "v".green(),
            brief.step,
            brief.agent_name
        );
    }
}
