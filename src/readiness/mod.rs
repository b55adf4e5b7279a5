//! Environment readiness checks.
//!
//! Four checks gate the tutorial: the container daemon, the orchestration
//! CLI, the Python packages, and the model server with its model. Each
//! check is a [`Probe`](crate::probe::Probe); [`ReadinessChecker`] builds
//! them from configuration and [`ReadinessResult`] collects their outcomes.
//!
//! The free functions use the built-in defaults and are the simplest entry
//! points:
//!
//! ```no_run
//! let result = ragready::readiness::validate_environment();
//! if !result.is_ready() {
//!     for (name, entry) in result.failing() {
//!         eprintln!("{}: {}", name, entry.hint.as_deref().unwrap_or(""));
//!     }
//! }
//! ```

pub mod check;
pub mod checker;
pub mod result;

pub use check::CheckName;
pub use checker::{
    check_model_server_ready, check_orchestrator_available, check_required_packages,
    check_runtime_available, evaluate, validate_environment, ReadinessChecker,
};
pub use result::{CheckEntry, ReadinessResult};
