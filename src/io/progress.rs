//! Terminal progress for batch extraction over many levels

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates the level bar and the per-phase spinner of a run
///
/// The level bar counts processed levels; the phase bar shows which step of
/// the pipeline is running for the current level or for the whole batch.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    level_bar: Option<ProgressBar>,
    phase_bar: Option<ProgressBar>,
    structure_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LEVEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Levels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            level_bar: None,
            phase_bar: None,
            structure_count: 0,
        }
    }

    /// Create the bars for a batch of `level_count` levels
    pub fn initialize(&mut self, level_count: usize) {
        self.structure_count = 0;

        let level_bar = ProgressBar::new(level_count as u64);
        level_bar.set_style(LEVEL_STYLE.clone());
        self.level_bar = Some(self.multi_progress.add(level_bar));

        let phase_bar = ProgressBar::new_spinner();
        phase_bar.set_style(PHASE_STYLE.clone());
        phase_bar.enable_steady_tick(Duration::from_millis(100));
        self.phase_bar = Some(self.multi_progress.add(phase_bar));
    }

    /// Show the phase currently running
    pub fn start_phase(&self, phase: &str, detail: &str) {
        if let Some(ref bar) = self.phase_bar {
            bar.set_prefix(phase.to_string());
            bar.set_message(detail.to_string());
        }
    }

    /// Show the level being extracted
    pub fn start_level(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.start_phase("extract", &display_name);
    }

    /// Count a finished level and the structures it produced
    pub fn complete_level(&mut self, structures: usize) {
        self.structure_count += structures;
        if let Some(ref bar) = self.level_bar {
            bar.inc(1);
            bar.set_message(format!("{} structures", self.structure_count));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.phase_bar {
            bar.finish_and_clear();
        }
        if let Some(ref bar) = self.level_bar {
            bar.finish_with_message(format!("{} structures", self.structure_count));
        }
        let _ = self.multi_progress.clear();
    }
}
