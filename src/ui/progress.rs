//! Progress reporting

use indicatif::{HumanBytes, ProgressBar, ProgressStyle};

/// Spinner shown while comparison rounds are running.
///
/// Cloning shares the underlying bar, so a clone can be moved into the
/// session's progress callback while the caller keeps the original for
/// the final `finish`.
#[derive(Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }

        Self { bar }
    }

    /// Refresh the spinner after a completed round.
    pub fn update(&self, rounds: u64, bytes: u64) {
        self.bar.set_message(format!(
            "Comparing... round {} | {} read",
            rounds,
            HumanBytes(bytes)
        ));
    }

    /// Remove the spinner once every verdict is settled.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
