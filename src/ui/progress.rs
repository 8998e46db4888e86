use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the key derivation and cipher run.
///
/// PBKDF2 at 200k iterations takes a human-noticeable moment; the spinner is
/// the only feedback that the tool has not hung.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(description: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template");

        bar.set_style(style);
        bar.set_message(description.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
