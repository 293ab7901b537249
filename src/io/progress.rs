//! Stage-by-stage progress display for a single figure run

use crate::io::configuration::{PIPELINE_STAGES, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks which pipeline stage is running
///
/// A hidden tracker still counts stages, it just draws nothing.
pub struct StageProgress {
    bar: ProgressBar,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StageProgress {
    /// Create a tracker for the standard pipeline, drawn only when `visible`
    pub fn new(visible: bool) -> Self {
        Self::with_stages(PIPELINE_STAGES, visible)
    }

    /// Create a tracker for `stages` steps
    pub fn with_stages(stages: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(stages as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(stages as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Announce the stage now running
    pub fn begin(&self, stage: &str) {
        self.bar.set_message(stage.to_string());
    }

    /// Mark the current stage complete
    pub fn complete(&self) {
        self.bar.inc(1);
    }

    /// Number of completed stages
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of stages
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Message of the most recently started stage
    pub fn current_stage(&self) -> String {
        self.bar.message()
    }

    /// Close the display
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
