//! Configuration loading, parsing, and validation for ragready.
//!
//! - Schema definitions and built-in defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use ragready::config::{load_config, REQUIRED_MODEL};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.required_model, REQUIRED_MODEL);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Built-in defaults
//! 2. Project config (`ragready.yml` in the project root)
//! 3. An explicit `--config <path>` replaces (2)

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{
    CommandSpec, ReadinessConfig, DEFAULT_PYTHON, DEFAULT_TIMEOUT_SECS, REQUIRED_MODEL,
    REQUIRED_PACKAGES,
};
pub use validator::{validate, validate_config, ValidationError};
