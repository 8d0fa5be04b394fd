//! Core logic for the VitalBoard patient dashboard.
//! This crate is the single source of truth for dashboard invariants.

pub mod config;
pub mod dataset;
pub mod datetime;
pub mod logging;
pub mod model;
pub mod route;
pub mod series;
pub mod service;

pub use config::{ConfigError, DashboardConfig};
pub use dataset::{builtin_patient, parse_patient, DatasetError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::patient::{MedicalRecord, Patient};
pub use model::series::{ActionRecord, ActionResult, MetricRecord, ReconciledPoint};
pub use route::Route;
pub use series::progress::{
    completion_rate, key_insights, summarize, summarize_with, ActivityCorrelation, GoalDirection,
    KeyInsights, ProgressBand, ProgressSummary,
};
pub use series::reconcile::{reconcile, reconcile_with, CollisionPolicy, ReconcileOptions};
pub use series::{SeriesError, SeriesStream};
pub use service::biometrics::{
    bmi, summarize_biometrics, BiometricSummary, BiometricsError, BmiCategory, HealthScoreBand,
};
pub use service::goal_timeline::{goal_timeline, GoalTimeline, TimelineError};
pub use service::medical_history::{
    report_link, sorted_by_recency, with_prescriptions, ReportKind, ReportUnavailable, ReviewState,
};
pub use service::recording::{
    ActionSubmission, MetricSubmission, RecordingKind, RecordingReceipt, RecordingService,
    SubmissionError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
