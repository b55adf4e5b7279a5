//! Configuration validation rules.
//!
//! - Probe timeout must be between one second and one hour
//! - Probe programs and the Python interpreter must be named
//! - The required model identifier must not be empty
//!
//! The `service` section is checked by `ragready wait` once its flags have
//! been merged in, so it is not part of these rules.

use crate::config::schema::ReadinessConfig;
use crate::error::{ReadyError, Result};

/// Upper bound for `timeout_secs`.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Config key the error refers to
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &ReadinessConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(1..=MAX_TIMEOUT_SECS).contains(&config.timeout_secs) {
        errors.push(ValidationError::new(
            "timeout_secs",
            format!("timeout_secs must be between 1 and {}", MAX_TIMEOUT_SECS),
        ));
    }

    for (field, spec) in [
        ("runtime", &config.runtime),
        ("orchestrator", &config.orchestrator),
        ("model_server", &config.model_server),
    ] {
        if spec.program.trim().is_empty() {
            errors.push(ValidationError::new(
                field,
                format!("{}.program must not be empty", field),
            ));
        }
    }

    if config.python.trim().is_empty() {
        errors.push(ValidationError::new("python", "python must not be empty"));
    }

    if config.required_model.trim().is_empty() {
        errors.push(ValidationError::new(
            "required_model",
            "required_model must not be empty",
        ));
    }

    if let Some(pkg) = config.required_packages.iter().find(|p| p.trim().is_empty()) {
        errors.push(ValidationError::new(
            "required_packages",
            format!("required_packages contains an empty name: {:?}", pkg),
        ));
    }

    errors
}

/// Validate a configuration, folding all errors into one.
pub fn validate(config: &ReadinessConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ReadyError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
