//! Progress display while an edit script runs against a collage

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EDIT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many collage steps have completed
///
/// The bar is hidden when progress output is disabled, so callers can report
/// unconditionally.
pub struct EditProgress {
    bar: ProgressBar,
}

impl EditProgress {
    /// Create a progress tracker for `total` steps
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(EDIT_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    /// Announce the step about to run
    pub fn start_step(&self, description: &str) {
        self.bar.set_message(description.to_string());
    }

    /// Mark the current step as done
    pub fn complete_step(&self) {
        self.bar.inc(1);
    }

    /// Run `f` with the bar hidden so log output does not draw over it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Number of completed steps
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
