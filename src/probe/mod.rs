//! Capability probes.
//!
//! A [`Probe`] answers one question about the host ("is the container
//! daemon up?", "is this model pulled?") by running a subprocess. Probes
//! never fail with an error: a missing program, a non-zero exit, a timeout,
//! or unexpected output all collapse into [`ProbeOutcome::Unavailable`] with
//! a reason that selects the remediation hint.
//!
//! # Probe kinds
//!
//! - [`CommandProbe`] - available when a command exits successfully
//! - [`OutputProbe`] - additionally requires a token in the command's output
//! - [`PackageProbe`] - resolves each Python package with the interpreter
//!
//! Tests substitute fake programs (or implement [`Probe`] directly) to drive
//! the readiness logic without Docker, Compose, Ollama or Python installed.

pub mod command;
pub mod outcome;
pub mod packages;

pub use command::{extract_version, run_probe_command, CommandProbe, OutputProbe};
pub use outcome::{ProbeOutcome, Unavailable};
pub use packages::{PackageProbe, FIND_SPEC_SCRIPT};

use crate::readiness::CheckName;

/// A single environment capability check.
pub trait Probe {
    /// Which readiness check this probe answers.
    fn name(&self) -> CheckName;

    /// Human-readable label for the report.
    fn label(&self) -> String {
        self.name().label().to_string()
    }

    /// Run the probe. Must not panic and must not block past its timeout.
    fn check(&self) -> ProbeOutcome;

    /// Remediation hint for an unavailable outcome.
    ///
    /// The default distinguishes a tool that is absent from one that is
    /// installed but misbehaving.
    fn remediation(&self, reason: &Unavailable) -> String {
        if reason.is_not_installed() {
            self.name().install_hint().to_string()
        } else {
            self.name().repair_hint().to_string()
        }
    }
}
