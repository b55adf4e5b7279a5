//! Progress spinners.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::ReadyTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: ReadyTheme,
    /// No animation; the final line is written straight to stdout.
    quiet: bool,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: ReadyTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme,
            quiet: false,
        }
    }

    /// Create a spinner that only prints its final result.
    pub fn quiet(theme: ReadyTheme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
            quiet: true,
        }
    }

    fn finish_with(&mut self, line: String) {
        if self.quiet {
            Term::stdout().write_line(&line).ok();
            return;
        }
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}
