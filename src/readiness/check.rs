//! The fixed set of readiness checks.

use serde::Serialize;
use std::fmt;

/// One environment precondition the tutorial depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    /// Container runtime daemon is running.
    ContainerRuntime,
    /// Container orchestration CLI is installed.
    ContainerOrchestrator,
    /// Python packages are importable.
    RequiredPackages,
    /// Model server is running with the required model pulled.
    ModelServer,
}

impl CheckName {
    /// Every check, in report order.
    pub const ALL: [CheckName; 4] = [
        CheckName::ContainerRuntime,
        CheckName::ContainerOrchestrator,
        CheckName::RequiredPackages,
        CheckName::ModelServer,
    ];

    /// Stable key used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Self::ContainerRuntime => "container-runtime",
            Self::ContainerOrchestrator => "container-orchestrator",
            Self::RequiredPackages => "required-packages",
            Self::ModelServer => "model-server",
        }
    }

    /// Default report label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ContainerRuntime => "Docker daemon running",
            Self::ContainerOrchestrator => "Docker Compose available",
            Self::RequiredPackages => "Required Python packages",
            Self::ModelServer => "Ollama with required model",
        }
    }

    /// Hint when the tool is not installed at all.
    pub fn install_hint(self) -> &'static str {
        match self {
            Self::ContainerRuntime => "Install and start Docker",
            Self::ContainerOrchestrator => "Install Docker Compose",
            Self::RequiredPackages => "Install Python 3, then run: pip install -r requirements.txt",
            Self::ModelServer => "Install Ollama",
        }
    }

    /// Hint when the tool is installed but not answering correctly.
    pub fn repair_hint(self) -> &'static str {
        match self {
            Self::ContainerRuntime => "Start the Docker daemon",
            Self::ContainerOrchestrator => "Reinstall Docker Compose",
            Self::RequiredPackages => "Run: pip install -r requirements.txt",
            Self::ModelServer => "Start the model server: ollama serve",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_kebab_case() {
        let keys: Vec<_> = CheckName::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "container-runtime",
                "container-orchestrator",
                "required-packages",
                "model-server"
            ]
        );
    }

    #[test]
    fn serializes_as_key() {
        let json = serde_json::to_string(&CheckName::ModelServer).unwrap();
        assert_eq!(json, "\"model-server\"");
    }

    #[test]
    fn display_matches_key() {
        for check in CheckName::ALL {
            assert_eq!(check.to_string(), check.key());
        }
    }

    #[test]
    fn every_check_has_distinct_hints() {
        for check in CheckName::ALL {
            assert!(!check.install_hint().is_empty());
            assert_ne!(check.install_hint(), check.repair_hint());
        }
    }
}
