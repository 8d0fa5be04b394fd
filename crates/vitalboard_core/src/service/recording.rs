//! Simulated metric/action recording.
//!
//! # Responsibility
//! - Validate recording forms against their trivial schemas.
//! - Simulate submission latency and hand back a receipt.
//!
//! # Invariants
//! - Recording never mutates the patient record; it always succeeds once
//!   the submission validates.
//! - Free-text fields are never written to logs.

use crate::config::DashboardConfig;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use uuid::Uuid;

/// Default cosmetic delay before a recording resolves.
pub const DEFAULT_RECORDING_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// A required field is empty after trimming.
    MissingField(&'static str),
    /// A numeric field does not hold a finite number.
    NotANumber { field: &'static str, value: String },
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::NotANumber { field, value } => {
                write!(f, "{field} must be a number, got `{value}`")
            }
        }
    }
}

impl Error for SubmissionError {}

/// Form input for recording one metric reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSubmission {
    pub metric_name: String,
    /// Raw form text; must parse as a number.
    pub value: String,
    pub status: String,
    pub comments: String,
    pub measurement_type: String,
}

impl Default for MetricSubmission {
    fn default() -> Self {
        Self {
            metric_name: String::new(),
            value: String::new(),
            status: "on_track".to_string(),
            comments: String::new(),
            measurement_type: "manual".to_string(),
        }
    }
}

/// Form input for recording one action occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSubmission {
    pub name: String,
    pub status: String,
    /// Raw form text; empty means no magnitude.
    pub value: String,
    pub comments: String,
}

impl Default for ActionSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: "completed".to_string(),
            value: String::new(),
            comments: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingKind {
    Metric,
    Action,
}

/// Acknowledgement of a simulated recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingReceipt {
    pub receipt_id: Uuid,
    pub kind: RecordingKind,
    pub name: String,
    pub value: Option<f64>,
}

/// Recording facade with a configurable cosmetic latency.
#[derive(Debug, Clone)]
pub struct RecordingService {
    latency: Duration,
}

impl Default for RecordingService {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDING_LATENCY)
    }
}

impl RecordingService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.recording_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Validates and "records" one metric reading.
    ///
    /// # Contract
    /// - `metric_name` and `value` are required; `value` must be numeric.
    /// - Blocks for the configured latency, then returns a fresh receipt.
    pub fn record_metric(
        &self,
        submission: &MetricSubmission,
    ) -> Result<RecordingReceipt, SubmissionError> {
        let name = require(&submission.metric_name, "metric_name")?;
        let raw_value = require(&submission.value, "value")?;
        let value = parse_number(raw_value, "value")?;

        self.simulate_latency();
        let receipt = RecordingReceipt {
            receipt_id: Uuid::new_v4(),
            kind: RecordingKind::Metric,
            name: name.to_string(),
            value: Some(value),
        };
        info!(
            "event=record_metric module=recording status=ok receipt_id={} latency_ms={}",
            receipt.receipt_id,
            self.latency.as_millis()
        );
        Ok(receipt)
    }

    /// Validates and "records" one action occurrence.
    ///
    /// # Contract
    /// - `name` and `status` are required.
    /// - `value` is optional but must be numeric when present.
    pub fn record_action(
        &self,
        submission: &ActionSubmission,
    ) -> Result<RecordingReceipt, SubmissionError> {
        let name = require(&submission.name, "name")?;
        require(&submission.status, "status")?;
        let raw_value = submission.value.trim();
        let value = if raw_value.is_empty() {
            None
        } else {
            Some(parse_number(raw_value, "value")?)
        };

        self.simulate_latency();
        let receipt = RecordingReceipt {
            receipt_id: Uuid::new_v4(),
            kind: RecordingKind::Action,
            name: name.to_string(),
            value,
        };
        info!(
            "event=record_action module=recording status=ok receipt_id={} latency_ms={}",
            receipt.receipt_id,
            self.latency.as_millis()
        );
        Ok(receipt)
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, SubmissionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SubmissionError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_number(value: &str, field: &'static str) -> Result<f64, SubmissionError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| SubmissionError::NotANumber {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn parse_number_rejects_non_finite_values() {
        assert!(parse_number("NaN", "value").is_err());
        assert!(parse_number("inf", "value").is_err());
        assert_eq!(parse_number("73.5", "value").expect("numeric"), 73.5);
        assert_eq!(parse_number("-2", "value").expect("numeric"), -2.0);
    }
}
