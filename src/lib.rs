//! ragready - Environment readiness checks for a local RAG tutorial.
//!
//! ragready verifies that the tools a retrieval-augmented-generation
//! walkthrough depends on are present before any heavy work starts: a
//! running container daemon, the container orchestration CLI, the Python
//! packages, and a local model server with the required model pulled. It
//! can also wait for a freshly started vector database to answer its health
//! endpoint.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Capability probes and their outcomes
//! - [`readiness`] - The four readiness checks and their aggregate
//! - [`report`] - Human and JSON report output
//! - [`service`] - Bounded health polling of the vector database
//! - [`shell`] - Subprocess execution with timeouts
//! - [`ui`] - Terminal output, spinners, and formatting
//!
//! # Example
//!
//! ```
//! use ragready::readiness::{evaluate, CheckName};
//! use ragready::probe::{Probe, ProbeOutcome};
//!
//! struct AlwaysUp(CheckName);
//!
//! impl Probe for AlwaysUp {
//!     fn name(&self) -> CheckName {
//!         self.0
//!     }
//!     fn check(&self) -> ProbeOutcome {
//!         ProbeOutcome::available()
//!     }
//! }
//!
//! let probes: Vec<Box<dyn Probe>> = CheckName::ALL
//!     .iter()
//!     .map(|c| Box::new(AlwaysUp(*c)) as Box<dyn Probe>)
//!     .collect();
//! assert!(evaluate(&probes).is_ready());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod readiness;
pub mod report;
pub mod service;
pub mod shell;
pub mod ui;

pub use error::{ReadyError, Result};
pub use readiness::{validate_environment, ReadinessResult};
pub use service::{poll_service_ready, ServicePollConfig};
pub use ui::format_bytes;
