//! Probe outcome types.
//!
//! Every probe answers with [`ProbeOutcome`]. The boolean readiness view is
//! [`ProbeOutcome::is_available`]; the reason behind an unavailable outcome
//! drives the remediation hint.

use std::fmt;
use std::time::Duration;

use crate::ui::format_duration;

/// Why a probe reported the capability as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// The program is not installed or not on PATH.
    NotInstalled { program: String },

    /// The program did not finish before its timeout.
    TimedOut { program: String, after: Duration },

    /// The program ran and exited unsuccessfully.
    Failed { program: String, code: Option<i32> },

    /// The program succeeded but its output lacked a required entry.
    MissingOutput { program: String, expected: String },

    /// Some packages could not be resolved.
    Unresolved { missing: Vec<String> },
}

impl Unavailable {
    /// Whether the underlying tool is absent (as opposed to present but failing).
    pub fn is_not_installed(&self) -> bool {
        matches!(self, Unavailable::NotInstalled { .. })
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled { program } => write!(f, "{} not found on PATH", program),
            Self::TimedOut { program, after } => {
                write!(f, "{} timed out after {}", program, format_duration(*after))
            }
            Self::Failed {
                program,
                code: Some(code),
            } => write!(f, "{} exited with code {}", program, code),
            Self::Failed {
                program,
                code: None,
            } => write!(f, "{} was terminated", program),
            Self::MissingOutput { program, expected } => {
                write!(f, "'{}' not listed by {}", expected, program)
            }
            Self::Unresolved { missing } => {
                write!(f, "packages not importable: {}", missing.join(", "))
            }
        }
    }
}

/// Result of running one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The capability is present.
    Available {
        /// Extra information worth showing (e.g. a version).
        detail: Option<String>,
    },
    /// The capability is missing or broken.
    Unavailable(Unavailable),
}

impl ProbeOutcome {
    /// Available with no detail.
    pub fn available() -> Self {
        ProbeOutcome::Available { detail: None }
    }

    /// Available with a detail string.
    pub fn available_with(detail: impl Into<String>) -> Self {
        ProbeOutcome::Available {
            detail: Some(detail.into()),
        }
    }

    /// Whether the capability is present.
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Available { .. })
    }

    /// The reason, if unavailable.
    pub fn reason(&self) -> Option<&Unavailable> {
        match self {
            ProbeOutcome::Unavailable(reason) => Some(reason),
            ProbeOutcome::Available { .. } => None,
        }
    }

    /// The detail, if available and one was recorded.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Available { detail } => detail.as_deref(),
            ProbeOutcome::Unavailable(_) => None,
        }
    }
}

impl From<Unavailable> for ProbeOutcome {
    fn from(reason: Unavailable) -> Self {
        ProbeOutcome::Unavailable(reason)
    }
}
