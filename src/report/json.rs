//! Machine-readable readiness report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::readiness::{CheckName, ReadinessResult};

/// One check in the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCheck {
    pub name: CheckName,
    pub label: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// The full JSON report printed by `check --json`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub ready: bool,
    pub checked_at: DateTime<Utc>,
    pub checks: Vec<JsonCheck>,
}

impl JsonReport {
    /// Build a report stamped with `checked_at`.
    pub fn from_result(result: &ReadinessResult, checked_at: DateTime<Utc>) -> Self {
        let checks = result
            .iter()
            .map(|(name, entry)| JsonCheck {
                name,
                label: entry.label.clone(),
                available: entry.is_available(),
                detail: entry.outcome.detail().map(str::to_string),
                reason: entry.outcome.reason().map(|r| r.to_string()),
                hint: entry.hint.clone(),
            })
            .collect();

        Self {
            ready: result.is_ready(),
            checked_at,
            checks,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
