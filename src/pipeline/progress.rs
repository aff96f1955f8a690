// file: src/pipeline/progress.rs
// description: step spinner and timing for a single export run
// reference: uses indicatif for progress display

use crate::utils::logging::format_step;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

pub struct ExportProgress {
    bar: ProgressBar,
    total_steps: usize,
    step: usize,
    start_time: Instant,
}

impl ExportProgress {
    pub fn with_color(total_steps: usize, colored: bool) -> Self {
        Self::from_bar(create_spinner(colored), total_steps)
    }

    /// Tracks steps without drawing anything.
    pub fn hidden(total_steps: usize) -> Self {
        Self::from_bar(ProgressBar::hidden(), total_steps)
    }

    fn from_bar(bar: ProgressBar, total_steps: usize) -> Self {
        Self {
            bar,
            total_steps,
            step: 0,
            start_time: Instant::now(),
        }
    }

    pub fn advance(&mut self, message: &str) {
        self.step = (self.step + 1).min(self.total_steps);
        self.bar
            .set_message(format_step(self.step, self.total_steps, message));
        self.bar.tick();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    pub fn abandon(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for ExportProgress {
    fn drop(&mut self) {
        self.abandon();
    }
}

fn create_spinner(colored: bool) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] {msg}"
    } else {
        "{spinner} [{elapsed_precise}] {msg}"
    };
    bar.set_style(
        ProgressStyle::default_spinner()
            .template(template)
            .expect("Failed to create spinner template"),
    );
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
