//! Day-aligned merge of metric and action streams.
//!
//! # Responsibility
//! - Emit exactly one `ReconciledPoint` per calendar day present in either stream.
//! - Resolve same-day collisions according to an explicit `CollisionPolicy`.
//!
//! # Invariants
//! - Days are keyed by UTC calendar date; labels are derived from the key.
//! - A day with no metric reading keeps `metric_value == None`.
//! - Output is stably sorted by the underlying instant, not by label.
//! - The point instant is the first metric timestamp of the day when one
//!   exists, otherwise the first action timestamp.

use crate::datetime::{day_label, parse_instant};
use crate::model::series::{ActionRecord, MetricRecord, ReconciledPoint};
use crate::series::{SeriesError, SeriesStream};
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use std::collections::HashMap;

const NOTES_SEPARATOR: &str = "; ";

/// How to treat several records of one stream on the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// First record in input order wins; later same-day records are dropped.
    #[default]
    KeepFirst,
    /// Sum action values, average metric values, join notes.
    ///
    /// `action_completed` holds only when every same-day action completed.
    Aggregate,
    /// Fail with `SeriesError::AmbiguousDay`.
    Reject,
}

impl CollisionPolicy {
    fn as_str(self) -> &'static str {
        match self {
            Self::KeepFirst => "keep_first",
            Self::Aggregate => "aggregate",
            Self::Reject => "reject",
        }
    }
}

/// Options for `reconcile_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOptions {
    pub collision: CollisionPolicy,
}

/// Merges metric and action streams using `CollisionPolicy::KeepFirst`.
pub fn reconcile(
    metrics: &[MetricRecord],
    actions: &[ActionRecord],
) -> Result<Vec<ReconciledPoint>, SeriesError> {
    reconcile_with(metrics, actions, &ReconcileOptions::default())
}

/// Merges metric and action streams into one day-aligned sequence.
///
/// # Errors
/// - `InvalidTimestamp` when any record timestamp does not parse. All
///   timestamps are checked before any merging happens.
/// - `AmbiguousDay` on a same-day collision under `CollisionPolicy::Reject`.
pub fn reconcile_with(
    metrics: &[MetricRecord],
    actions: &[ActionRecord],
    options: &ReconcileOptions,
) -> Result<Vec<ReconciledPoint>, SeriesError> {
    let metric_instants = parse_stream(
        metrics.iter().map(|record| record.recorded_at.as_str()),
        SeriesStream::Metric,
    )?;
    let action_instants = parse_stream(
        actions.iter().map(|record| record.performed_at.as_str()),
        SeriesStream::Action,
    )?;

    let policy = options.collision;
    let mut days: Vec<DayAccumulator> = Vec::new();
    let mut slot_by_day: HashMap<NaiveDate, usize> = HashMap::new();

    for (instant, record) in metric_instants.into_iter().zip(metrics) {
        let day = instant.date_naive();
        match slot_by_day.get(&day) {
            Some(&slot) => {
                resolve_collision(policy, SeriesStream::Metric, day)?;
                if policy == CollisionPolicy::Aggregate {
                    days[slot].merge_metric(record);
                }
            }
            None => {
                slot_by_day.insert(day, days.len());
                days.push(DayAccumulator::from_metric(instant, record));
            }
        }
    }

    for (instant, record) in action_instants.into_iter().zip(actions) {
        let day = instant.date_naive();
        match slot_by_day.get(&day) {
            Some(&slot) if days[slot].action_count == 0 => days[slot].attach_action(record),
            Some(&slot) => {
                resolve_collision(policy, SeriesStream::Action, day)?;
                if policy == CollisionPolicy::Aggregate {
                    days[slot].merge_action(record);
                }
            }
            None => {
                slot_by_day.insert(day, days.len());
                days.push(DayAccumulator::from_action(instant, record));
            }
        }
    }

    // Stable sort keeps input order for identical instants.
    days.sort_by(|left, right| left.instant.cmp(&right.instant));

    debug!(
        "event=reconcile module=series status=ok policy={} metrics={} actions={} points={}",
        policy.as_str(),
        metrics.len(),
        actions.len(),
        days.len()
    );

    Ok(days.into_iter().map(DayAccumulator::into_point).collect())
}

fn parse_stream<'a>(
    timestamps: impl Iterator<Item = &'a str>,
    stream: SeriesStream,
) -> Result<Vec<DateTime<Utc>>, SeriesError> {
    timestamps
        .enumerate()
        .map(|(index, value)| {
            parse_instant(value).ok_or_else(|| SeriesError::InvalidTimestamp {
                stream,
                index,
                value: value.to_string(),
            })
        })
        .collect()
}

fn resolve_collision(
    policy: CollisionPolicy,
    stream: SeriesStream,
    day: NaiveDate,
) -> Result<(), SeriesError> {
    match policy {
        CollisionPolicy::KeepFirst => {
            debug!(
                "event=reconcile_collision module=series status=dropped stream={} day={}",
                stream, day
            );
            Ok(())
        }
        CollisionPolicy::Aggregate => Ok(()),
        CollisionPolicy::Reject => Err(SeriesError::AmbiguousDay {
            stream,
            day: day.to_string(),
        }),
    }
}

struct DayAccumulator {
    instant: DateTime<Utc>,
    full_date: String,
    metric_sum: f64,
    metric_count: usize,
    metric_notes: String,
    action_value: f64,
    action_count: usize,
    action_completed: bool,
    action_notes: String,
}

impl DayAccumulator {
    fn from_metric(instant: DateTime<Utc>, record: &MetricRecord) -> Self {
        Self {
            instant,
            full_date: record.recorded_at.clone(),
            metric_sum: record.recorded_value,
            metric_count: 1,
            metric_notes: record.notes.clone(),
            action_value: 0.0,
            action_count: 0,
            action_completed: false,
            action_notes: String::new(),
        }
    }

    fn from_action(instant: DateTime<Utc>, record: &ActionRecord) -> Self {
        let mut day = Self {
            instant,
            full_date: record.performed_at.clone(),
            metric_sum: 0.0,
            metric_count: 0,
            metric_notes: String::new(),
            action_value: 0.0,
            action_count: 0,
            action_completed: false,
            action_notes: String::new(),
        };
        day.attach_action(record);
        day
    }

    fn attach_action(&mut self, record: &ActionRecord) {
        self.action_value = record.value.unwrap_or(0.0);
        self.action_count = 1;
        self.action_completed = record.result.is_completed();
        self.action_notes = record.notes.clone();
    }

    fn merge_metric(&mut self, record: &MetricRecord) {
        self.metric_sum += record.recorded_value;
        self.metric_count += 1;
        append_notes(&mut self.metric_notes, &record.notes);
    }

    fn merge_action(&mut self, record: &ActionRecord) {
        self.action_value += record.value.unwrap_or(0.0);
        self.action_count += 1;
        self.action_completed = self.action_completed && record.result.is_completed();
        append_notes(&mut self.action_notes, &record.notes);
    }

    fn into_point(self) -> ReconciledPoint {
        let metric_value = if self.metric_count == 0 {
            None
        } else {
            Some(self.metric_sum / self.metric_count as f64)
        };

        ReconciledPoint {
            date: day_label(&self.instant),
            full_date: self.full_date,
            metric_value,
            metric_notes: self.metric_notes,
            action_value: self.action_value,
            action_completed: self.action_completed,
            action_notes: self.action_notes,
        }
    }
}

fn append_notes(existing: &mut String, next: &str) {
    if next.is_empty() {
        return;
    }
    if !existing.is_empty() {
        existing.push_str(NOTES_SEPARATOR);
    }
    existing.push_str(next);
}
