//! Goal countdown projection.
//!
//! Goals carry only a target date, so elapsed progress is measured against a
//! fixed window ending on that date.

use crate::datetime::parse_instant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Length of the window assumed to precede every target date.
pub const ASSUMED_GOAL_WINDOW_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    InvalidTargetDate(String),
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTargetDate(value) => write!(f, "invalid goal target date `{value}`"),
        }
    }
}

impl Error for TimelineError {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTimeline {
    /// Whole days left, rounded up; negative once the target has passed.
    pub days_remaining: i64,
    /// Share of the assumed window already elapsed, clamped to 0..=100.
    pub elapsed_percentage: f64,
}

impl GoalTimeline {
    pub fn is_overdue(&self) -> bool {
        self.days_remaining < 0
    }
}

/// Computes days remaining and elapsed share for a goal target date.
pub fn goal_timeline(target_date: &str, now: DateTime<Utc>) -> Result<GoalTimeline, TimelineError> {
    let target = parse_instant(target_date)
        .ok_or_else(|| TimelineError::InvalidTargetDate(target_date.to_string()))?;

    let days_remaining = ceil_days((target - now).num_milliseconds());
    let elapsed = (ASSUMED_GOAL_WINDOW_DAYS - days_remaining) as f64;
    let elapsed_percentage =
        (elapsed / ASSUMED_GOAL_WINDOW_DAYS as f64 * 100.0).clamp(0.0, 100.0);

    Ok(GoalTimeline {
        days_remaining,
        elapsed_percentage,
    })
}

fn ceil_days(millis: i64) -> i64 {
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::ceil_days;

    #[test]
    fn ceil_days_rounds_toward_positive_infinity() {
        assert_eq!(ceil_days(0), 0);
        assert_eq!(ceil_days(1), 1);
        assert_eq!(ceil_days(86_400_000), 1);
        assert_eq!(ceil_days(86_400_001), 2);
        assert_eq!(ceil_days(-1), 0);
        assert_eq!(ceil_days(-129_600_000), -1);
    }
}
