//! Time-series record shapes.
//!
//! # Responsibility
//! - Define metric/action observations as they appear in the patient record.
//! - Define the calendar-day aligned point consumed by chart renderers.
//!
//! # Invariants
//! - Timestamps stay as their original strings; parsing happens at use sites
//!   so invalid input is reported, not coerced.
//! - `ReconciledPoint::metric_value == None` means "no reading that day",
//!   which is distinct from a reading of `0.0`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One scalar observation of a tracked health metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// ISO 8601 timestamp of the reading.
    pub recorded_at: String,
    pub recorded_value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub notes: String,
}

impl MetricRecord {
    /// Creates a reading with empty unit and notes.
    pub fn new(recorded_at: impl Into<String>, recorded_value: f64) -> Self {
        Self {
            recorded_at: recorded_at.into(),
            recorded_value,
            unit: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Outcome of one logged action occurrence.
///
/// Unknown outcome strings are preserved verbatim and count as not completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionResult {
    Completed,
    Missed,
    Partial,
    Other(String),
}

impl ActionResult {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Missed => "missed",
            Self::Partial => "partial",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for ActionResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => Self::Completed,
            "missed" => Self::Missed,
            "partial" => Self::Partial,
            _ => Self::Other(value),
        }
    }
}

impl From<ActionResult> for String {
    fn from(value: ActionResult) -> Self {
        match value {
            ActionResult::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for ActionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged occurrence of a tracked behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// ISO 8601 timestamp of the occurrence.
    pub performed_at: String,
    pub result: ActionResult,
    /// Optional magnitude, e.g. step count. `null` and missing both map to `None`.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub notes: String,
}

impl ActionRecord {
    /// Creates an occurrence with no magnitude and empty unit/notes.
    pub fn new(performed_at: impl Into<String>, result: ActionResult) -> Self {
        Self {
            performed_at: performed_at.into(),
            result,
            value: None,
            unit: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// One calendar-day row combining metric and action data for charting.
///
/// Serialized with camelCase keys to match chart consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledPoint {
    /// Display label of the day, e.g. `Feb 15`.
    pub date: String,
    /// Original timestamp used for ordering; the metric timestamp wins on merge.
    pub full_date: String,
    pub metric_value: Option<f64>,
    pub metric_notes: String,
    /// `0.0` when no action fell on this day.
    pub action_value: f64,
    pub action_completed: bool,
    pub action_notes: String,
}
