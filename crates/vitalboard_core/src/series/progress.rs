//! Progress statistics over metric/action streams.
//!
//! # Responsibility
//! - Compute goal progress from the first and last metric readings.
//! - Compute action completion rate.
//! - Derive the key-insight projection shown beside the correlation chart.
//!
//! # Invariants
//! - Empty streams yield zeroed values; `metric_count`, `action_count` and
//!   `progress_defined` let callers tell placeholders from real zeros.
//! - The progress ratio `(initial - current) / (initial - target)` reads the
//!   same for both goal directions; direction only decides what "improving" means.

use crate::datetime::{long_date_label, parse_instant};
use crate::model::series::{ActionRecord, MetricRecord};
use crate::series::{SeriesError, SeriesStream};
use serde::{Deserialize, Serialize};

const POOR_PROGRESS_BELOW: f64 = 25.0;
const AVERAGE_PROGRESS_BELOW: f64 = 50.0;
const POSITIVE_CORRELATION_RATE_ABOVE: f64 = 50.0;

/// Which way a metric must move to approach its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// E.g. weight loss.
    #[default]
    LowerIsBetter,
    /// E.g. daily step goals.
    HigherIsBetter,
}

/// Summary statistics for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Last metric value in input order, `0.0` when there are none.
    pub current_value: f64,
    /// First metric value in input order, `0.0` when there are none.
    pub initial_value: f64,
    /// `initial_value - target_value`.
    pub total_change: f64,
    /// `initial_value - current_value`.
    pub current_change: f64,
    /// `0.0` when `progress_defined` is false.
    pub progress_percentage: f64,
    /// False when `total_change == 0` and the percentage is a placeholder.
    pub progress_defined: bool,
    /// Percentage of actions with result `completed`.
    pub completion_rate: f64,
    pub metric_count: usize,
    pub action_count: usize,
    pub direction: GoalDirection,
}

impl ProgressSummary {
    /// Returns whether the latest reading moved toward the goal direction.
    pub fn is_improving(&self) -> bool {
        match self.direction {
            GoalDirection::LowerIsBetter => self.current_value < self.initial_value,
            GoalDirection::HigherIsBetter => self.current_value > self.initial_value,
        }
    }

    /// Magnitude of movement in the goal direction; negative when regressing.
    pub fn improvement(&self) -> f64 {
        match self.direction {
            GoalDirection::LowerIsBetter => self.initial_value - self.current_value,
            GoalDirection::HigherIsBetter => self.current_value - self.initial_value,
        }
    }

    pub fn band(&self) -> ProgressBand {
        ProgressBand::from_percentage(self.progress_percentage)
    }
}

/// Colour bucket of a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Poor,
    Average,
    Good,
}

impl ProgressBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < POOR_PROGRESS_BELOW {
            Self::Poor
        } else if percentage < AVERAGE_PROGRESS_BELOW {
            Self::Average
        } else {
            Self::Good
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
        }
    }
}

/// Computes progress statistics for a lower-is-better goal.
pub fn summarize(
    metrics: &[MetricRecord],
    actions: &[ActionRecord],
    target_value: f64,
) -> ProgressSummary {
    summarize_with(metrics, actions, target_value, GoalDirection::default())
}

/// Computes progress statistics for a goal with explicit direction.
pub fn summarize_with(
    metrics: &[MetricRecord],
    actions: &[ActionRecord],
    target_value: f64,
    direction: GoalDirection,
) -> ProgressSummary {
    let current_value = metrics.last().map_or(0.0, |record| record.recorded_value);
    let initial_value = metrics.first().map_or(0.0, |record| record.recorded_value);
    let total_change = initial_value - target_value;
    let current_change = initial_value - current_value;
    let progress_defined = total_change != 0.0;
    let progress_percentage = if progress_defined {
        current_change / total_change * 100.0
    } else {
        0.0
    };

    ProgressSummary {
        current_value,
        initial_value,
        total_change,
        current_change,
        progress_percentage,
        progress_defined,
        completion_rate: completion_rate(actions),
        metric_count: metrics.len(),
        action_count: actions.len(),
        direction,
    }
}

/// Percentage of actions whose result is `completed`; `0.0` for no actions.
pub fn completion_rate(actions: &[ActionRecord]) -> f64 {
    if actions.is_empty() {
        return 0.0;
    }
    let completed = actions
        .iter()
        .filter(|record| record.result.is_completed())
        .count();
    completed as f64 / actions.len() as f64 * 100.0
}

/// Verdict on whether logged activity lines up with metric movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCorrelation {
    Positive,
    NeedsConsistency,
}

impl ActivityCorrelation {
    pub fn message(self) -> &'static str {
        match self {
            Self::Positive => "Positive correlation between activity and metric progress",
            Self::NeedsConsistency => "More consistent activity may help accelerate progress",
        }
    }
}

/// Headline facts shown under the correlation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInsights {
    pub initial_value: f64,
    /// Long label of the first reading, `None` without readings.
    pub initial_date: Option<String>,
    /// Movement in the goal direction.
    pub improvement: f64,
    /// `|(initial - current) / initial * 100|`; `None` when initial is zero.
    pub percent_change: Option<f64>,
    pub correlation: ActivityCorrelation,
}

/// Derives key insights from the metric stream and its summary.
///
/// # Errors
/// - `InvalidTimestamp` when the first metric timestamp does not parse.
pub fn key_insights(
    metrics: &[MetricRecord],
    summary: &ProgressSummary,
) -> Result<KeyInsights, SeriesError> {
    let initial_date = match metrics.first() {
        Some(first) => {
            let instant =
                parse_instant(&first.recorded_at).ok_or_else(|| SeriesError::InvalidTimestamp {
                    stream: SeriesStream::Metric,
                    index: 0,
                    value: first.recorded_at.clone(),
                })?;
            Some(long_date_label(&instant))
        }
        None => None,
    };

    let percent_change = if summary.initial_value == 0.0 {
        None
    } else {
        Some((summary.current_change / summary.initial_value * 100.0).abs())
    };

    let correlation =
        if summary.completion_rate > POSITIVE_CORRELATION_RATE_ABOVE && summary.is_improving() {
            ActivityCorrelation::Positive
        } else {
            ActivityCorrelation::NeedsConsistency
        };

    Ok(KeyInsights {
        initial_value: summary.initial_value,
        initial_date,
        improvement: summary.improvement(),
        percent_change,
        correlation,
    })
}
