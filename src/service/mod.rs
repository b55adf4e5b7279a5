//! Vector database service readiness.
//!
//! A freshly started service needs a few seconds before it answers. This
//! module polls its HTTP health endpoint a bounded number of times with a
//! fixed delay in between.
//!
//! - [`ServicePollConfig`] - target address and attempt budget
//! - [`poll`] - the bounded poll loop and the HTTP health endpoint

pub mod poll;

pub use poll::{
    poll_service_ready, AttemptResult, HealthEndpoint, HealthPoller, HealthResponse,
    HttpHealthEndpoint, PollReport,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ReadyError, Result};

/// Default service host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default vector database HTTP port.
pub const DEFAULT_PORT: u16 = 6333;

/// Default number of health requests before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Default pause between attempts, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 2.0;

/// Default timeout for a single health request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Default health endpoint path.
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// Where to poll and how many times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServicePollConfig {
    /// Target host name or address
    pub host: String,

    /// Target port
    pub port: u16,

    /// Number of health requests to issue (at least 1)
    pub max_attempts: u32,

    /// Seconds to wait between attempts (0 or more)
    pub delay: f64,

    /// Timeout for each health request, in seconds
    pub request_timeout: u64,

    /// Health endpoint path
    pub path: String,
}

impl Default for ServicePollConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY_SECS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

impl ServicePollConfig {
    /// Create a config for `host:port` with the default attempt budget.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            ..Default::default()
        }
    }

    /// Full health URL, e.g. `http://localhost:6333/health`.
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }

    /// Delay between attempts. Out-of-range values collapse to zero.
    pub fn delay_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay).unwrap_or(Duration::ZERO)
    }

    /// Timeout for a single health request.
    pub fn request_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Check that the attempt budget and timings are in range.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| {
            Err(ReadyError::InvalidPollConfig {
                message: message.to_string(),
            })
        };

        if self.host.trim().is_empty() {
            return invalid("host must not be empty");
        }
        if self.max_attempts == 0 {
            return invalid("max_attempts must be at least 1");
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return invalid("delay must be a non-negative number of seconds");
        }
        if self.request_timeout == 0 {
            return invalid("request_timeout must be at least 1 second");
        }
        if !self.path.starts_with('/') {
            return invalid("path must start with '/'");
        }
        Ok(())
    }
}
