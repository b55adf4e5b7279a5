//! Configuration file discovery and loading.
//!
//! Built-in defaults are always the base layer. A `ragready.yml` in the
//! project root is layered on top when present; an explicit `--config`
//! path replaces project discovery and must exist.

use crate::config::schema::ReadinessConfig;
use crate::config::validator::validate;
use crate::error::{ReadyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "ragready.yml";

/// Find the project config at `<root>/ragready.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into `ReadinessConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ReadinessConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReadyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `ReadinessConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReadinessConfig> {
    if content.trim().is_empty() {
        return Ok(ReadinessConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ReadyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective configuration for a project.
///
/// If `config_override` is provided, loads only that file. Otherwise uses
/// `ragready.yml` from the project root when it exists, or the defaults.
/// The result is validated before it is returned.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ReadinessConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading project config from {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                ReadinessConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}
