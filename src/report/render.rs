//! Human-readable readiness report.

use crate::readiness::{CheckEntry, ReadinessResult};
use crate::ui::{StatusKind, UserInterface};

/// Title of the readiness report.
pub const REPORT_TITLE: &str = "Environment Validation Report";

/// Render the readiness report through `ui`.
///
/// One status line per check, the overall verdict, and when not ready a
/// "Next steps" list with one hint per failing check. Quiet output keeps
/// only the verdict and the hints.
pub fn render_report(result: &ReadinessResult, ui: &mut dyn UserInterface) {
    if ui.output_mode().shows_progress() {
        ui.show_header(REPORT_TITLE);
        for (_, entry) in result.iter() {
            ui.show_status(entry.is_available().into(), &status_line(entry));
        }
        ui.message("");
    }

    if result.is_ready() {
        ui.show_status(StatusKind::Success, "Overall status: Ready to proceed");
        return;
    }

    ui.show_status(StatusKind::Failed, "Overall status: Setup required");
    ui.message("");
    ui.message("Next steps:");
    for (_, entry) in result.failing() {
        if let Some(hint) = &entry.hint {
            ui.show_hint(hint);
        }
    }
}

fn status_line(entry: &CheckEntry) -> String {
    match (entry.outcome.detail(), entry.outcome.reason()) {
        (Some(detail), _) => format!("{} ({})", entry.label, detail),
        (None, Some(reason)) => format!("{} ({})", entry.label, reason),
        (None, None) => entry.label.clone(),
    }
}
