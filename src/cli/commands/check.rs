//! Check command implementation.
//!
//! The `ragready check` command runs every readiness check and prints the
//! report. It exits 0 when the environment is ready and 1 otherwise.

use chrono::Utc;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::readiness::ReadinessChecker;
use crate::report::{render_report, JsonReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The check command implementation.
pub struct CheckCommand {
    source: ConfigSource,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(source: ConfigSource, args: CheckArgs) -> Self {
        Self { source, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load()?;
        let result = ReadinessChecker::new(config).validate_environment();

        if self.args.json {
            let report = JsonReport::from_result(&result, Utc::now());
            ui.message(&report.to_json()?);
        } else {
            render_report(&result, ui);
        }

        if result.is_ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ui::{MockUI, StatusKind};
    use std::fs;
    use tempfile::TempDir;

    const ALL_PRESENT: &str = r#"
runtime: { program: "true" }
orchestrator: { program: sh, args: ["-c", "echo docker-compose version 1.29.2"] }
model_server: { program: sh, args: ["-c", "echo 'llama3.1:8b  42182419e950  4.7 GB'"] }
python: sh
required_packages: []
"#;

    const NOTHING_PRESENT: &str = r#"
runtime: { program: ragready-missing-docker }
orchestrator: { program: ragready-missing-compose }
model_server: { program: ragready-missing-ollama }
python: ragready-missing-python
"#;

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ragready.yml"), config).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: CheckArgs) -> (CommandResult, MockUI) {
        let cmd = CheckCommand::new(ConfigSource::new(temp.path(), None), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn ready_environment_exits_zero() {
        let temp = project(ALL_PRESENT);

        let (result, ui) = run(&temp, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_status(StatusKind::Success, "Ready to proceed"));
        assert!(ui.has_status(StatusKind::Success, "version 1.29.2"));
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn missing_tools_exit_one_with_install_hints() {
        let temp = project(NOTHING_PRESENT);

        let (result, ui) = run(&temp, CheckArgs::default());

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.hints().len(), 4);
        assert!(ui.has_hint("Install and start Docker"));
        assert!(ui.has_hint("Install Ollama and run: ragready-missing-ollama pull llama3.1:8b"));
    }

    #[test]
    fn json_report() {
        let temp = project(NOTHING_PRESENT);

        let (result, ui) = run(&temp, CheckArgs { json: true });

        assert_eq!(result.exit_code, 1);
        assert!(ui.statuses().is_empty());
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["ready"], false);
        assert_eq!(value["checks"].as_array().unwrap().len(), 4);
        assert_eq!(
            value["checks"][0]["reason"],
            "ragready-missing-docker not found on PATH"
        );
    }
}
