//! Progress spinner shown while providers are being tried
//!
//! Purely cosmetic: the spinner ticks on its own background worker and
//! carries no data dependency on the shortening loop. It is scoped to one
//! shortening operation and must be cleared before results are printed.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::constants::spinner;

pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }

    /// Start the spinner: the original four-glyph cycle at a 100ms cadence.
    pub fn start_shortening(&mut self) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.yellow} {msg}")
                .unwrap()
                .tick_chars(spinner::TICK_CHARS),
        );
        bar.set_message(spinner::MESSAGE);
        bar.enable_steady_tick(Duration::from_millis(spinner::TICK_MILLIS));
        self.bar = Some(bar);
    }

    /// Show which provider is currently being tried
    pub fn set_current_provider(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{} {}", spinner::MESSAGE, name));
        }
    }

    /// Stop the spinner and erase its line completely
    pub fn finish_and_clear(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
