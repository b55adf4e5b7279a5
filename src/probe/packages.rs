//! Python package resolution.
//!
//! Each package is resolved in its own interpreter process with
//! `importlib.util.find_spec`, which locates a module without importing it.
//! Heavy packages (torch) therefore resolve in milliseconds.

use std::time::Duration;

use super::command::run_probe_command;
use super::{Probe, ProbeOutcome, Unavailable};
use crate::config::CommandSpec;
use crate::readiness::CheckName;

/// Interpreter script that exits 0 when `sys.argv[1]` is resolvable.
pub const FIND_SPEC_SCRIPT: &str =
    "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec(sys.argv[1]) else 1)";

/// Available when every package resolves in the interpreter.
#[derive(Debug, Clone)]
pub struct PackageProbe {
    interpreter: CommandSpec,
    packages: Vec<String>,
    timeout: Duration,
}

impl PackageProbe {
    /// `interpreter` is invoked as `<interpreter> -c <script> <package>`.
    pub fn new(interpreter: CommandSpec, packages: Vec<String>, timeout: Duration) -> Self {
        Self {
            interpreter,
            packages,
            timeout,
        }
    }

    /// Probe using a bare interpreter name such as `python3`.
    pub fn for_python(python: &str, packages: Vec<String>, timeout: Duration) -> Self {
        Self::new(CommandSpec::new(python, &[]), packages, timeout)
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    fn resolve_command(&self, package: &str) -> CommandSpec {
        let mut spec = self.interpreter.clone();
        spec.args
            .extend(["-c", FIND_SPEC_SCRIPT, package].map(String::from));
        spec
    }
}

impl Probe for PackageProbe {
    fn name(&self) -> CheckName {
        CheckName::RequiredPackages
    }

    fn check(&self) -> ProbeOutcome {
        let mut missing = Vec::new();

        for package in &self.packages {
            match run_probe_command(&self.resolve_command(package), self.timeout) {
                Ok(_) => tracing::debug!("Package '{}' resolved", package),
                Err(Unavailable::Failed { .. }) => {
                    tracing::debug!("Package '{}' not importable", package);
                    missing.push(package.clone());
                }
                // The interpreter itself is unusable; no point trying the rest.
                Err(reason) => return reason.into(),
            }
        }

        if missing.is_empty() {
            ProbeOutcome::available_with(format!("{} packages", self.packages.len()))
        } else {
            Unavailable::Unresolved { missing }.into()
        }
    }
}
