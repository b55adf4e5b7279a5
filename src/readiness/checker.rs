//! Runs the configured probes and aggregates their outcomes.

use super::{CheckEntry, CheckName, ReadinessResult};
use crate::config::ReadinessConfig;
use crate::probe::{CommandProbe, OutputProbe, PackageProbe, Probe, ProbeOutcome};

/// Runs the readiness probes described by a [`ReadinessConfig`].
///
/// # Example
///
/// ```no_run
/// use ragready::config::ReadinessConfig;
/// use ragready::readiness::ReadinessChecker;
///
/// let checker = ReadinessChecker::new(ReadinessConfig::default());
/// let result = checker.validate_environment();
/// println!("ready: {}", result.is_ready());
/// ```
pub struct ReadinessChecker {
    config: ReadinessConfig,
}

impl ReadinessChecker {
    pub fn new(config: ReadinessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReadinessConfig {
        &self.config
    }

    /// Probe for the container runtime daemon.
    pub fn runtime_probe(&self) -> CommandProbe {
        CommandProbe::new(
            CheckName::ContainerRuntime,
            self.config.runtime.clone(),
            self.config.timeout(),
        )
    }

    /// Probe for the container orchestration CLI.
    pub fn orchestrator_probe(&self) -> CommandProbe {
        CommandProbe::new(
            CheckName::ContainerOrchestrator,
            self.config.orchestrator.clone(),
            self.config.timeout(),
        )
        .with_version()
    }

    /// Probe for the Python packages.
    pub fn packages_probe(&self) -> PackageProbe {
        PackageProbe::for_python(
            &self.config.python,
            self.config.required_packages.clone(),
            self.config.timeout(),
        )
    }

    /// Probe for the model server and required model.
    pub fn model_probe(&self) -> OutputProbe {
        OutputProbe::new(
            CheckName::ModelServer,
            self.config.model_server.clone(),
            &self.config.required_model,
            self.config.timeout(),
        )
    }

    /// All four probes, in report order.
    pub fn probes(&self) -> Vec<Box<dyn Probe>> {
        vec![
            Box::new(self.runtime_probe()),
            Box::new(self.orchestrator_probe()),
            Box::new(self.packages_probe()),
            Box::new(self.model_probe()),
        ]
    }

    pub fn check_runtime_available(&self) -> bool {
        run_logged(&self.runtime_probe()).is_available()
    }

    pub fn check_orchestrator_available(&self) -> bool {
        run_logged(&self.orchestrator_probe()).is_available()
    }

    pub fn check_required_packages(&self) -> bool {
        run_logged(&self.packages_probe()).is_available()
    }

    pub fn check_model_server_ready(&self) -> bool {
        run_logged(&self.model_probe()).is_available()
    }

    /// Run all four probes.
    pub fn validate_environment(&self) -> ReadinessResult {
        evaluate(&self.probes())
    }
}

/// Run each probe once and collect the outcomes.
///
/// Probes run sequentially. A later probe's result replaces an earlier one
/// with the same [`CheckName`].
pub fn evaluate(probes: &[Box<dyn Probe>]) -> ReadinessResult {
    let mut result = ReadinessResult::new();

    for probe in probes {
        let outcome = run_logged(probe.as_ref());
        let label = probe.label();
        let entry = match outcome {
            ProbeOutcome::Available { detail } => CheckEntry::available(label, detail),
            ProbeOutcome::Unavailable(reason) => {
                let hint = probe.remediation(&reason);
                CheckEntry::unavailable(label, reason, hint)
            }
        };
        result.insert(probe.name(), entry);
    }

    tracing::info!(
        "Environment {}",
        if result.is_ready() { "ready" } else { "not ready" }
    );
    result
}

fn run_logged(probe: &dyn Probe) -> ProbeOutcome {
    let outcome = probe.check();
    match outcome.reason() {
        None => tracing::debug!("{}: available", probe.name()),
        Some(reason) => tracing::debug!("{}: unavailable ({})", probe.name(), reason),
    }
    outcome
}

/// Check the container runtime with the default configuration.
pub fn check_runtime_available() -> bool {
    ReadinessChecker::new(ReadinessConfig::default()).check_runtime_available()
}

/// Check the container orchestration CLI with the default configuration.
pub fn check_orchestrator_available() -> bool {
    ReadinessChecker::new(ReadinessConfig::default()).check_orchestrator_available()
}

/// Check the default Python packages with the default interpreter.
pub fn check_required_packages() -> bool {
    ReadinessChecker::new(ReadinessConfig::default()).check_required_packages()
}

/// Check that the model server lists the default required model.
pub fn check_model_server_ready() -> bool {
    ReadinessChecker::new(ReadinessConfig::default()).check_model_server_ready()
}

/// Run every check with the default configuration.
pub fn validate_environment() -> ReadinessResult {
    ReadinessChecker::new(ReadinessConfig::default()).validate_environment()
}
