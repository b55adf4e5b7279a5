//! Error types for ragready operations.
//!
//! This module defines [`ReadyError`], the error type used by configuration
//! loading and the CLI plumbing, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Readiness checks never return errors; every fault collapses to "not ready"
//! - Use `ReadyError` for configuration and invocation problems the user must fix
//! - Use `anyhow::Error` (via `ReadyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ragready operations.
#[derive(Debug, Error)]
pub enum ReadyError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Service poll parameters are out of range.
    #[error("Invalid service poll configuration: {message}")]
    InvalidPollConfig { message: String },

    /// A probe program is not installed or not on PATH.
    #[error("Program not found: {program}")]
    ProgramNotFound { program: String },

    /// A subprocess could not be started or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ragready operations.
pub type Result<T> = std::result::Result<T, ReadyError>;
