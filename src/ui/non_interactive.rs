//! Non-interactive UI for CI/headless environments.

use super::theme::ReadyTheme;
use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Output is plain text with bracketed status markers so it reads well in
/// logs. When running in CI (detected via `is_ci()`), spinner start lines are
/// suppressed; only their final result is printed.
pub struct NonInteractiveUI {
    mode: OutputMode,
    is_ci: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            is_ci: crate::shell::is_ci(),
        }
    }

    /// Create with explicit CI flag (for testing).
    pub fn with_ci(mode: OutputMode, is_ci: bool) -> Self {
        Self { mode, is_ci }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("{}\n", ReadyTheme::plain().format_header(title));
        }
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        println!("{}", kind.format_plain(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", ReadyTheme::plain().format_hint(hint));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() && !self.is_ci {
            println!("{}", message);
        }
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final result.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", StatusKind::Success.format_plain(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        println!("{}", StatusKind::Failed.format_plain(msg));
    }
}
