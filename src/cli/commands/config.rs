//! Config command implementation.
//!
//! The `ragready config` command shows the effective configuration or the
//! JSON Schema of `ragready.yml`.

use crate::cli::args::ConfigArgs;
use crate::config::{find_project_config, ReadinessConfig};
use crate::error::{ReadyError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The config command implementation.
pub struct ConfigCommand {
    source: ConfigSource,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(source: ConfigSource, args: ConfigArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = schemars::schema_for!(ReadinessConfig);
            ui.message(&serde_json::to_string_pretty(&schema)?);
            return Ok(CommandResult::success());
        }

        let config = self.source.load()?;

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&config)?);
            return Ok(CommandResult::success());
        }

        // Show which file the values came from
        let origin = self
            .source
            .config_path
            .clone()
            .or_else(|| find_project_config(&self.source.project_root));
        match origin {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# built-in defaults"),
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| ReadyError::Other(e.into()))?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(temp: &TempDir, args: ConfigArgs) -> (Result<CommandResult>, MockUI) {
        let cmd = ConfigCommand::new(ConfigSource::new(temp.path(), None), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui);
        (result, ui)
    }

    #[test]
    fn defaults_without_config_file() {
        let temp = TempDir::new().unwrap();

        let (result, ui) = run(&temp, ConfigArgs::default());

        assert!(result.unwrap().success);
        assert!(ui.has_message("# built-in defaults"));
        assert!(ui.has_message("llama3.1:8b"));
    }

    #[test]
    fn shows_config_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ragready.yml"), "timeout_secs: 9\n").unwrap();

        let (result, ui) = run(&temp, ConfigArgs::default());

        assert!(result.unwrap().success);
        assert!(ui.has_message("ragready.yml"));
        assert!(ui.has_message("timeout_secs: 9"));
    }

    #[test]
    fn json_output() {
        let temp = TempDir::new().unwrap();
        let args = ConfigArgs {
            json: true,
            schema: false,
        };

        let (result, ui) = run(&temp, args);

        assert!(result.unwrap().success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["service"]["port"], 6333);
    }

    #[test]
    fn schema_output_ignores_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ragready.yml"), "timeout_secs: [").unwrap();
        let args = ConfigArgs {
            json: false,
            schema: true,
        };

        let (result, ui) = run(&temp, args);

        assert!(result.unwrap().success);
        assert!(ui.has_message("required_model"));
    }

    #[test]
    fn invalid_config_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ragready.yml"), "timeout_secs: 0\n").unwrap();

        let (result, _ui) = run(&temp, ConfigArgs::default());

        assert!(matches!(
            result,
            Err(ReadyError::ConfigValidationError { .. })
        ));
    }
}
