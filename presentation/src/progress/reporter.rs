//! Spinner shown while a one-shot request waits for its reply

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner with a fixed message, cleared when the reply arrives
pub struct WaitingSpinner {
    bar: ProgressBar,
}

impl WaitingSpinner {
    /// Start a spinner on stderr
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner once the reply is in
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    /// Leave a note in place of the spinner when waiting was interrupted
    pub fn abandon(self, note: &str) {
        self.bar.abandon_with_message(note.yellow().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_finishes() {
        let spinner = WaitingSpinner::hidden();
        assert!(spinner.bar.is_hidden());
        spinner.finish();
    }

    #[test]
    fn test_style_template_is_valid() {
        assert!(ProgressStyle::with_template("{spinner:.green} {msg}").is_ok());
    }
}
