//! Configuration schema definitions for ragready.
//!
//! This module contains the struct definitions that map to the
//! `ragready.yml` file format. Every key is optional; missing keys fall
//! back to the built-in defaults below.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::service::ServicePollConfig;

/// Default timeout for each probe subprocess, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Model that must be pulled into the local model server.
pub const REQUIRED_MODEL: &str = "llama3.1:8b";

/// Python packages the tutorial imports.
pub const REQUIRED_PACKAGES: &[&str] = &[
    "qdrant_client",
    "langchain",
    "sentence_transformers",
    "torch",
];

/// Interpreter used to resolve Python packages.
pub const DEFAULT_PYTHON: &str = "python3";

/// A program invocation: executable name plus arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CommandSpec {
    /// Executable name or path (looked up on PATH)
    pub program: String,

    /// Arguments passed verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from string slices.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Root configuration structure for ragready.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Timeout for each probe command, in seconds
    pub timeout_secs: u64,

    /// Container runtime status command
    pub runtime: CommandSpec,

    /// Container orchestration CLI version command
    pub orchestrator: CommandSpec,

    /// Model server "list local models" command
    pub model_server: CommandSpec,

    /// Model identifier that must appear in the model server listing
    pub required_model: String,

    /// Python interpreter used for package resolution
    pub python: String,

    /// Packages that must be importable
    pub required_packages: Vec<String>,

    /// Vector database health polling
    pub service: ServicePollConfig,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            runtime: CommandSpec::new("docker", &["info"]),
            orchestrator: CommandSpec::new("docker-compose", &["--version"]),
            model_server: CommandSpec::new("ollama", &["list"]),
            required_model: REQUIRED_MODEL.to_string(),
            python: DEFAULT_PYTHON.to_string(),
            required_packages: REQUIRED_PACKAGES.iter().map(|p| p.to_string()).collect(),
            service: ServicePollConfig::default(),
        }
    }
}

impl ReadinessConfig {
    /// Per-probe timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
