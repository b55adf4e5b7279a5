//! Probes backed by a single command.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use super::{Probe, ProbeOutcome, Unavailable};
use crate::config::CommandSpec;
use crate::error::ReadyError;
use crate::readiness::CheckName;
use crate::shell::{execute, CommandOptions, CommandResult};

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.\d+(?:\.\d+)?)").expect("version regex must compile")
});

/// Extract the first dotted version number from command output.
///
/// ```
/// use ragready::probe::extract_version;
///
/// assert_eq!(
///     extract_version("docker-compose version 1.29.2, build 5becea4c"),
///     Some("1.29.2".to_string())
/// );
/// assert_eq!(extract_version("no version here"), None);
/// ```
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_RE
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run a probe command, mapping every failure mode to an [`Unavailable`] reason.
pub fn run_probe_command(
    spec: &CommandSpec,
    timeout: Duration,
) -> std::result::Result<CommandResult, Unavailable> {
    let program = spec.program.clone();
    match execute(spec, &CommandOptions::with_timeout(timeout)) {
        Ok(result) if result.timed_out => Err(Unavailable::TimedOut {
            program,
            after: timeout,
        }),
        Ok(result) if result.success => Ok(result),
        Ok(result) => Err(Unavailable::Failed {
            program,
            code: result.exit_code,
        }),
        Err(ReadyError::ProgramNotFound { .. }) => Err(Unavailable::NotInstalled { program }),
        Err(e) => {
            tracing::debug!("Probe command '{}' could not run: {}", spec, e);
            Err(Unavailable::Failed {
                program,
                code: None,
            })
        }
    }
}

/// Available when the command exits with status 0.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    name: CheckName,
    command: CommandSpec,
    timeout: Duration,
    report_version: bool,
}

impl CommandProbe {
    pub fn new(name: CheckName, command: CommandSpec, timeout: Duration) -> Self {
        Self {
            name,
            command,
            timeout,
            report_version: false,
        }
    }

    /// Report the version found in stdout as the outcome detail.
    pub fn with_version(mut self) -> Self {
        self.report_version = true;
        self
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }
}

impl Probe for CommandProbe {
    fn name(&self) -> CheckName {
        self.name
    }

    fn check(&self) -> ProbeOutcome {
        match run_probe_command(&self.command, self.timeout) {
            Ok(result) => {
                let version = self
                    .report_version
                    .then(|| extract_version(&result.stdout))
                    .flatten();
                match version {
                    Some(v) => ProbeOutcome::available_with(format!("version {}", v)),
                    None => ProbeOutcome::available(),
                }
            }
            Err(reason) => reason.into(),
        }
    }
}

/// Available when the command succeeds and its stdout contains `expected`.
#[derive(Debug, Clone)]
pub struct OutputProbe {
    name: CheckName,
    command: CommandSpec,
    expected: String,
    timeout: Duration,
}

impl OutputProbe {
    pub fn new(
        name: CheckName,
        command: CommandSpec,
        expected: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            command,
            expected: expected.into(),
            timeout,
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl Probe for OutputProbe {
    fn name(&self) -> CheckName {
        self.name
    }

    fn label(&self) -> String {
        match self.name {
            CheckName::ModelServer => format!("Ollama with {}", self.expected),
            other => other.label().to_string(),
        }
    }

    fn check(&self) -> ProbeOutcome {
        match run_probe_command(&self.command, self.timeout) {
            Ok(result) if result.stdout.contains(&self.expected) => ProbeOutcome::available(),
            Ok(_) => Unavailable::MissingOutput {
                program: self.command.program.clone(),
                expected: self.expected.clone(),
            }
            .into(),
            Err(reason) => reason.into(),
        }
    }

    fn remediation(&self, reason: &Unavailable) -> String {
        match reason {
            Unavailable::NotInstalled { .. } => format!(
                "{} and run: {} pull {}",
                self.name.install_hint(),
                self.command.program,
                self.expected
            ),
            Unavailable::MissingOutput { .. } => {
                format!("Run: {} pull {}", self.command.program, self.expected)
            }
            _ => self.name.repair_hint().to_string(),
        }
    }
}
