//! Aggregated readiness results.

use std::collections::BTreeMap;

use super::CheckName;
use crate::probe::ProbeOutcome;

/// Outcome of one check, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    /// Report label.
    pub label: String,
    /// Probe outcome.
    pub outcome: ProbeOutcome,
    /// Remediation hint, present only when unavailable.
    pub hint: Option<String>,
}

impl CheckEntry {
    /// An available entry.
    pub fn available(label: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            label: label.into(),
            outcome: ProbeOutcome::Available { detail },
            hint: None,
        }
    }

    /// An unavailable entry with its hint.
    pub fn unavailable(
        label: impl Into<String>,
        reason: crate::probe::Unavailable,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            outcome: ProbeOutcome::Unavailable(reason),
            hint: Some(hint.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.outcome.is_available()
    }
}

/// Mapping from check name to its entry, iterated in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadinessResult {
    entries: BTreeMap<CheckName, CheckEntry>,
}

impl ReadinessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) a check's entry.
    pub fn insert(&mut self, name: CheckName, entry: CheckEntry) {
        self.entries.insert(name, entry);
    }

    pub fn get(&self, name: CheckName) -> Option<&CheckEntry> {
        self.entries.get(&name)
    }

    /// Whether `name` was recorded as available.
    pub fn passed(&self, name: CheckName) -> bool {
        self.get(name).is_some_and(CheckEntry::is_available)
    }

    /// Logical AND of every recorded check.
    ///
    /// An empty result is not ready.
    pub fn is_ready(&self) -> bool {
        !self.entries.is_empty() && self.entries.values().all(CheckEntry::is_available)
    }

    /// Entries that are unavailable, in report order.
    pub fn failing(&self) -> impl Iterator<Item = (CheckName, &CheckEntry)> {
        self.iter().filter(|(_, entry)| !entry.is_available())
    }

    /// All entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckName, &CheckEntry)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain boolean view keyed by check name.
    pub fn to_map(&self) -> BTreeMap<CheckName, bool> {
        self.iter()
            .map(|(name, entry)| (name, entry.is_available()))
            .collect()
    }
}
