//! Time-series reconciliation and progress statistics.
//!
//! # Responsibility
//! - Merge a metric stream and an action stream into one day-aligned sequence.
//! - Derive progress and completion statistics from the same streams.
//!
//! # Invariants
//! - Inputs are borrowed immutably; every operation returns fresh values.
//! - Invalid timestamps are reported as `SeriesError`, never coerced.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod progress;
pub mod reconcile;

/// Which input stream a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStream {
    Metric,
    Action,
}

impl Display for SeriesStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Action => f.write_str("action"),
        }
    }
}

/// Input error raised by series operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// A record timestamp could not be parsed as ISO 8601.
    InvalidTimestamp {
        stream: SeriesStream,
        index: usize,
        value: String,
    },
    /// Two records of one stream fall on the same day under `CollisionPolicy::Reject`.
    AmbiguousDay { stream: SeriesStream, day: String },
}

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp {
                stream,
                index,
                value,
            } => write!(
                f,
                "invalid timestamp `{value}` on {stream} record #{index}"
            ),
            Self::AmbiguousDay { stream, day } => {
                write!(f, "multiple {stream} records fall on {day}")
            }
        }
    }
}

impl Error for SeriesError {}
