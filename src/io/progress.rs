//! Progress display for random-walk trials

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks trials completed and successes found during a random walk
pub struct TrialProgress {
    bar: ProgressBar,
    successes: usize,
}

impl TrialProgress {
    /// Create a visible progress bar for `trials` trials
    pub fn new(trials: usize) -> Self {
        let bar = ProgressBar::new(trials as u64);
        bar.set_style(TRIAL_STYLE.clone());
        bar.set_message("0 found");
        Self { bar, successes: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(trials: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(trials as u64);
        Self { bar, successes: 0 }
    }

    /// Record a finished trial
    pub fn complete_trial(&mut self, reached_planet: bool) {
        if reached_planet {
            self.successes += 1;
            self.bar.set_message(format!("{} found", self.successes));
        }
        self.bar.inc(1);
    }

    /// Trials recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Successful trials recorded so far
    pub const fn successes(&self) -> usize {
        self.successes
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
