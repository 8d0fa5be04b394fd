//! Text rendering of dashboard views.
//!
//! # Responsibility
//! - Resolve a view path and print that view of the embedded patient record.
//! - Keep all derivations in `vitalboard_core`; this binary only formats.

use chrono::{DateTime, Utc};
use clap::Parser;
use log::{info, warn};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use vitalboard_core::model::patient::Patient;
use vitalboard_core::{
    builtin_patient, core_version, goal_timeline, key_insights, reconcile, report_link,
    sorted_by_recency, summarize, summarize_biometrics, with_prescriptions, DashboardConfig,
    ReportKind, ReviewState, Route,
};

type RenderResult = Result<(), Box<dyn Error>>;

/// Patient dashboard views rendered as plain text.
#[derive(Debug, Parser)]
#[command(name = "vitalboard", version, about, long_about = None)]
struct Cli {
    /// View path, e.g. `/`, `/profile`, `/health-goals`
    #[arg(default_value = "/")]
    path: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "VITALBOARD_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> DashboardConfig {
        DashboardConfig {
            log_dir: self.log_dir.clone(),
            ..DashboardConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = cli.config().apply_logging() {
        eprintln!("vitalboard: logging disabled: {err}");
    }

    let result = builtin_patient()
        .map_err(Into::into)
        .and_then(|patient| render(&mut io::stdout().lock(), &patient, &cli.path, Utc::now()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vitalboard: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Renders the view resolved from `path`.
fn render(out: &mut impl Write, patient: &Patient, path: &str, now: DateTime<Utc>) -> RenderResult {
    let route = Route::resolve(path);
    info!(
        "event=render module=cli status=start route={:?} version={}",
        route,
        core_version()
    );

    writeln!(out, "== {} ==", route.title())?;
    match route {
        Route::Dashboard => render_dashboard(out, patient, now),
        Route::Profile => render_profile(out, patient),
        Route::HealthMetrics => render_health_metrics(out, patient),
        Route::HealthGoals => render_health_goals(out, patient, now),
        Route::MedicalHistory => render_medical_history(out, patient),
        Route::NotFound => {
            warn!("event=render module=cli status=not_found");
            writeln!(out, "404: nothing lives at `{path}`.")?;
            let known: Vec<&str> = Route::NAVIGABLE.iter().map(|route| route.path()).collect();
            writeln!(out, "Try one of: {}", known.join(", "))?;
            Ok(())
        }
    }
}

fn render_dashboard(out: &mut impl Write, patient: &Patient, now: DateTime<Utc>) -> RenderResult {
    writeln!(out, "Hello, {}", patient.profile_data.demographics.name)?;
    render_health_metrics(out, patient)?;
    render_health_goals(out, patient, now)?;
    if let Some(latest) = sorted_by_recency(&patient.medical_reviews.medical_history).first() {
        writeln!(
            out,
            "Latest visit #{}: {} ({})",
            latest.id,
            latest.assessment_diagnosis,
            ReviewState::from_status(&latest.review_status).label()
        )?;
    }
    Ok(())
}

fn render_profile(out: &mut impl Write, patient: &Patient) -> RenderResult {
    let profile = &patient.profile_data;
    let demographics = &profile.demographics;
    let doctor = &profile.clinical_status.care_team.primary_doctor;
    writeln!(out, "Name: {}", demographics.name)?;
    writeln!(
        out,
        "Born: {} (age {}), {}",
        demographics.date_of_birth, demographics.age, demographics.gender
    )?;
    writeln!(out, "Country: {}", demographics.location.country_code)?;
    writeln!(out, "Blood type: {}", profile.genetic_proxies.blood_type)?;
    writeln!(out, "Circadian rhythm: {}", profile.lifestyle.circadian_rhythm)?;
    writeln!(
        out,
        "Primary doctor: {} ({}, {}) {}",
        doctor.name, doctor.specialty, doctor.clinic_name, doctor.phone_number
    )?;
    writeln!(out, "Timezone: {}", profile.temporal_context.timezone)?;
    Ok(())
}

fn render_health_metrics(out: &mut impl Write, patient: &Patient) -> RenderResult {
    let summary = summarize_biometrics(&patient.profile_data.lifestyle.biometrics)?;
    writeln!(
        out,
        "Height {} cm, weight {} kg, BMI {:.1} ({})",
        summary.height_cm,
        summary.weight_kg,
        summary.bmi,
        summary.bmi_category.label()
    )?;
    writeln!(
        out,
        "Health score {}/100 ({})",
        summary.health_score,
        summary.health_band.as_str()
    )?;
    Ok(())
}

fn render_health_goals(out: &mut impl Write, patient: &Patient, now: DateTime<Utc>) -> RenderResult {
    let goal = &patient.health_goal;
    let timeline = goal_timeline(&goal.target_date, now)?;
    writeln!(out, "Goal: {} (target {})", goal.goal_name, goal.target_date)?;
    writeln!(
        out,
        "  {} days remaining, {:.0}% of window elapsed",
        timeline.days_remaining, timeline.elapsed_percentage
    )?;
    for metric in &goal.metrics {
        writeln!(
            out,
            "  metric {}: target {} {}",
            metric.metric_name, metric.target_value, metric.unit
        )?;
    }
    for action in &goal.actions {
        writeln!(out, "  action {}: {}", action.name, action.description)?;
    }

    let series = &patient.time_series;
    let (Some((metric_name, metric)), Some((action_name, action))) =
        (series.primary_metric(), series.primary_action())
    else {
        writeln!(out, "No tracked time series.")?;
        return Ok(());
    };

    let details = &series.goal_details;
    let summary = summarize(&metric.records, &action.records, details.target_value);
    writeln!(out, "Tracked goal: {} ({})", details.goal_name, metric_name)?;
    writeln!(
        out,
        "  current {} {unit}, target {} {unit}, {} completion {:.0}%",
        summary.current_value,
        details.target_value,
        action_name,
        summary.completion_rate,
        unit = metric.details.unit
    )?;
    if summary.progress_defined {
        writeln!(
            out,
            "  progress {:.0}% ({})",
            summary.progress_percentage,
            summary.band().as_str()
        )?;
    } else {
        writeln!(out, "  progress n/a")?;
    }

    for point in reconcile(&metric.records, &action.records)? {
        let reading = point
            .metric_value
            .map_or_else(|| "-".to_string(), |value| format!("{value}"));
        let mark = if point.action_completed { "x" } else { " " };
        writeln!(
            out,
            "  {:<7} {:>6}  [{}] {:>6}",
            point.date, reading, mark, point.action_value
        )?;
    }

    let insights = key_insights(&metric.records, &summary)?;
    if let Some(date) = &insights.initial_date {
        writeln!(
            out,
            "  started at {} {} on {}",
            insights.initial_value, metric.details.unit, date
        )?;
    }
    if let Some(change) = insights.percent_change {
        writeln!(
            out,
            "  improved by {:.1} {} ({:.1}% change)",
            insights.improvement, metric.details.unit, change
        )?;
    }
    writeln!(out, "  {}", insights.correlation.message())?;
    Ok(())
}

fn render_medical_history(out: &mut impl Write, patient: &Patient) -> RenderResult {
    let history = &patient.medical_reviews.medical_history;
    for record in sorted_by_recency(history) {
        let state = ReviewState::from_status(&record.review_status);
        writeln!(out, "#{} [{}] {}", record.id, state.label(), record.assessment_diagnosis)?;
        if let Some(score) = record.health_score {
            writeln!(out, "  health score {score}")?;
        }
        match report_link(record, ReportKind::Final) {
            Ok(url) => writeln!(out, "  report: {url}")?,
            Err(notice) => writeln!(out, "  report: {notice}")?,
        }
    }

    writeln!(out, "Prescriptions:")?;
    let prescribed = with_prescriptions(history);
    if prescribed.is_empty() {
        writeln!(out, "  none")?;
    }
    for record in prescribed {
        for item in record
            .prescriptions
            .iter()
            .flat_map(|prescription| &prescription.prescription_items)
        {
            writeln!(
                out,
                "  {} {} via {}: {} for {}",
                item.medication_name, item.dosage, item.route, item.frequency, item.duration
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render, Cli};
    use chrono::{DateTime, TimeZone, Utc};
    use clap::error::ErrorKind;
    use clap::Parser;
    use std::path::PathBuf;
    use vitalboard_core::builtin_patient;
    use vitalboard_core::model::patient::Patient;

    fn record_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 27, 10, 0, 0).unwrap()
    }

    fn render_to_string(patient: &Patient, path: &str) -> String {
        let mut out = Vec::new();
        render(&mut out, patient, path, record_clock()).expect("render succeeds");
        String::from_utf8(out).expect("utf-8 output")
    }

    fn chart_rows(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter(|line| line.contains("  [x] ") || line.contains("  [ ] "))
            .collect()
    }

    #[test]
    fn unknown_path_renders_not_found_view() {
        let patient = builtin_patient().expect("embedded dataset");
        let output = render_to_string(&patient, "/settings");
        assert!(output.starts_with("== Page Not Found =="));
        assert!(output.contains("404: nothing lives at `/settings`."));
        assert!(output.contains("/medical-history"));
    }

    #[test]
    fn dashboard_renders_one_row_per_reconciled_day() {
        let patient = builtin_patient().expect("embedded dataset");
        let output = render_to_string(&patient, "/");
        assert!(output.starts_with("== Dashboard =="));

        let rows = chart_rows(&output);
        assert_eq!(rows.len(), 5);
        for (row, label) in rows.iter().zip(["Feb 15", "Feb 16", "Feb 17", "Feb 22", "Mar 1"]) {
            assert!(row.trim_start().starts_with(label), "unexpected row: {row}");
        }
        assert!(output.contains("progress 30% (average)"));
        assert!(output.contains("BMI 38.6 (Obese)"));
    }

    #[test]
    fn undefined_progress_is_not_shown_as_zero() {
        let mut patient = builtin_patient().expect("embedded dataset");
        patient.time_series.goal_details.target_value = 75.0;

        let output = render_to_string(&patient, "/health-goals");
        assert!(output.contains("  progress n/a"));
        assert!(!output.contains("progress 0%"));
    }

    #[test]
    fn medical_history_marks_missing_reports() {
        let patient = builtin_patient().expect("embedded dataset");
        let output = render_to_string(&patient, "/medical-history/");
        assert!(output.contains("#33 [Pending]"));
        assert!(output.contains("report: The medical report is not available yet."));
        assert!(output.contains("Ibuprofen 200 mg via Oral"));
    }

    #[test]
    fn cli_defaults_to_dashboard_path() {
        let cli = Cli::try_parse_from(["vitalboard"]).expect("no args is valid");
        assert_eq!(cli.path, "/");
    }

    #[test]
    fn cli_accepts_path_and_log_dir() {
        let cli = Cli::try_parse_from(["vitalboard", "--log-dir", "/tmp/vitalboard", "/profile"])
            .expect("valid args");
        assert_eq!(cli.path, "/profile");
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/vitalboard")));
        assert_eq!(cli.config().log_dir, Some(PathBuf::from("/tmp/vitalboard")));
    }

    #[test]
    fn help_flag_is_not_treated_as_a_path() {
        let err = Cli::try_parse_from(["vitalboard", "--help"]).expect_err("help exits early");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_a_parse_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/\xff".to_vec());
        let err = Cli::try_parse_from([OsString::from("vitalboard"), raw])
            .expect_err("non-utf8 path must be rejected");
        assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
    }
}
