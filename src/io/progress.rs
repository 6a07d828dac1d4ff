//! Progress display for batch runs
//!
//! Shows one bar stepping through the four pipeline stages of the current
//! file, plus an overall file counter when more than one image is queued.

use crate::io::configuration::STAGE_NAMES;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of maze images
///
/// Each file advances a stage bar through the pipeline stages; a second
/// bar tracks overall batch completion when several files are queued.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bar: None,
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let stage_bar = ProgressBar::new(STAGE_NAMES.len() as u64);
        stage_bar.set_style(STAGE_STYLE.clone());
        self.stage_bar = Some(self.multi_progress.add(stage_bar));
    }

    /// Reset the stage bar for a new file
    pub fn start_file(&mut self, path: &Path) {
        if let Some(ref stage_bar) = self.stage_bar {
            stage_bar.set_position(0);
            stage_bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            stage_bar.set_message("starting");
        }
    }

    /// Advance to the given pipeline stage (0-based index into the run order)
    pub fn start_stage(&mut self, stage: usize) {
        if let Some(ref stage_bar) = self.stage_bar {
            stage_bar.set_position(stage as u64);
            stage_bar.set_message(STAGE_NAMES.get(stage).copied().unwrap_or(""));
        }
    }

    /// Mark the current file as completed and update batch progress
    pub fn complete_file(&mut self) {
        if let Some(ref stage_bar) = self.stage_bar {
            stage_bar.set_position(STAGE_NAMES.len() as u64);
            stage_bar.set_message("done");
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
