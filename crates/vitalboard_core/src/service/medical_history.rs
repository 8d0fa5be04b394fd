//! Medical-history projections.
//!
//! # Responsibility
//! - Order review visits newest first.
//! - Select visits that carry prescriptions.
//! - Resolve report links, reporting unavailability instead of navigating.
//!
//! # Invariants
//! - Visit ids increase over time, so id order is recency order.

use crate::model::patient::MedicalRecord;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Title of the user-facing notice for a missing report.
pub const REPORT_UNAVAILABLE_TITLE: &str = "Report Not Available";

/// Review workflow state of one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    Approved,
    Pending,
}

impl ReviewState {
    /// Anything other than `approved` is shown as pending.
    pub fn from_status(status: &str) -> Self {
        if status == "approved" {
            Self::Approved
        } else {
            Self::Pending
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
        }
    }
}

/// Which report of a visit is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Final,
    Preliminary,
}

/// The requested report has no URL yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportUnavailable {
    pub record_id: u32,
    pub kind: ReportKind,
}

impl Display for ReportUnavailable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("The medical report is not available yet.")
    }
}

impl Error for ReportUnavailable {}

/// Returns visits ordered by id, newest first.
pub fn sorted_by_recency(records: &[MedicalRecord]) -> Vec<&MedicalRecord> {
    let mut sorted: Vec<&MedicalRecord> = records.iter().collect();
    sorted.sort_by(|left, right| right.id.cmp(&left.id));
    sorted
}

/// Returns visits with at least one prescription, newest first.
pub fn with_prescriptions(records: &[MedicalRecord]) -> Vec<&MedicalRecord> {
    sorted_by_recency(records)
        .into_iter()
        .filter(|record| !record.prescriptions.is_empty())
        .collect()
}

/// Resolves the URL of a visit report.
pub fn report_link(record: &MedicalRecord, kind: ReportKind) -> Result<&str, ReportUnavailable> {
    let url = match kind {
        ReportKind::Final => record.report_url.as_deref(),
        ReportKind::Preliminary => record.pre_report_url.as_deref(),
    };
    url.ok_or_else(|| {
        info!(
            "event=report_unavailable module=medical_history status=missing record_id={}",
            record.id
        );
        ReportUnavailable {
            record_id: record.id,
            kind,
        }
    })
}
