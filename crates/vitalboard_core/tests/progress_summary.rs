use vitalboard_core::{
    completion_rate, key_insights, summarize, summarize_with, ActionRecord, ActionResult,
    ActivityCorrelation, GoalDirection, MetricRecord, ProgressBand, SeriesError,
};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

fn weights(values: &[f64]) -> Vec<MetricRecord> {
    values
        .iter()
        .enumerate()
        .map(|(week, value)| {
            MetricRecord::new(format!("2025-02-{:02}T08:00:00Z", 1 + week * 7), *value)
        })
        .collect()
}

fn walks(results: &[ActionResult]) -> Vec<ActionRecord> {
    results
        .iter()
        .enumerate()
        .map(|(day, result)| {
            ActionRecord::new(format!("2025-02-{:02}T07:00:00Z", 1 + day), result.clone())
        })
        .collect()
}

#[test]
fn empty_inputs_yield_zeroed_placeholder_summary() {
    let summary = summarize(&[], &[], 70.0);
    assert_eq!(summary.current_value, 0.0);
    assert_eq!(summary.initial_value, 0.0);
    assert_eq!(summary.progress_percentage, 0.0);
    assert_eq!(summary.completion_rate, 0.0);
    assert_eq!(summary.metric_count, 0);
    assert_eq!(summary.action_count, 0);
}

#[test]
fn completion_rate_counts_only_completed() {
    let actions = walks(&[
        ActionResult::Completed,
        ActionResult::Completed,
        ActionResult::Missed,
    ]);
    approx(completion_rate(&actions), 66.67);
    approx(summarize(&[], &actions, 70.0).completion_rate, 66.67);

    let partial = walks(&[ActionResult::Partial, ActionResult::Completed]);
    approx(completion_rate(&partial), 50.0);
}

#[test]
fn progress_percentage_follows_first_and_last_reading() {
    let summary = summarize(&weights(&[75.0, 74.0, 73.5]), &[], 70.0);
    assert_eq!(summary.initial_value, 75.0);
    assert_eq!(summary.current_value, 73.5);
    assert_eq!(summary.total_change, 5.0);
    assert_eq!(summary.current_change, 1.5);
    approx(summary.progress_percentage, 30.0);
    assert!(summary.progress_defined);
    assert_eq!(summary.band(), ProgressBand::Average);
    assert!(summary.is_improving());
}

#[test]
fn progress_uses_input_order_not_time_order() {
    // Last in input order is the "current" reading even if it is older.
    let records = vec![
        MetricRecord::new("2025-03-01T08:00:00Z", 73.5),
        MetricRecord::new("2025-02-15T08:00:00Z", 75.0),
    ];
    let summary = summarize(&records, &[], 70.0);
    assert_eq!(summary.initial_value, 73.5);
    assert_eq!(summary.current_value, 75.0);
}

#[test]
fn zero_denominator_is_flagged_as_undefined() {
    let summary = summarize(&weights(&[70.0, 69.0]), &[], 70.0);
    assert_eq!(summary.progress_percentage, 0.0);
    assert!(!summary.progress_defined);
}

#[test]
fn regression_yields_negative_progress() {
    let summary = summarize(&weights(&[75.0, 76.0]), &[], 70.0);
    approx(summary.progress_percentage, -20.0);
    assert!(!summary.is_improving());
    assert_eq!(summary.band(), ProgressBand::Poor);
}

#[test]
fn higher_is_better_goal_reads_the_same_ratio() {
    let steps = weights(&[5000.0, 6000.0, 7000.0]);
    let summary = summarize_with(&steps, &[], 10_000.0, GoalDirection::HigherIsBetter);
    approx(summary.progress_percentage, 40.0);
    assert!(summary.is_improving());
    assert_eq!(summary.improvement(), 2000.0);
}

#[test]
fn key_insights_report_positive_correlation() {
    let metrics = vec![
        MetricRecord::new("2025-02-15T08:00:00Z", 75.0),
        MetricRecord::new("2025-03-01T08:00:00Z", 73.5),
    ];
    let actions = walks(&[
        ActionResult::Completed,
        ActionResult::Completed,
        ActionResult::Missed,
    ]);
    let summary = summarize(&metrics, &actions, 70.0);

    let insights = key_insights(&metrics, &summary).expect("valid first timestamp");
    assert_eq!(insights.initial_value, 75.0);
    assert_eq!(insights.initial_date.as_deref(), Some("Feb 15, 2025"));
    approx(insights.improvement, 1.5);
    approx(insights.percent_change.expect("non-zero baseline"), 2.0);
    assert_eq!(insights.correlation, ActivityCorrelation::Positive);
}

#[test]
fn key_insights_ask_for_consistency_when_rate_is_low() {
    let metrics = weights(&[75.0, 74.0]);
    let actions = walks(&[ActionResult::Completed, ActionResult::Missed]);
    let summary = summarize(&metrics, &actions, 70.0);

    let insights = key_insights(&metrics, &summary).expect("valid first timestamp");
    assert_eq!(insights.correlation, ActivityCorrelation::NeedsConsistency);
    assert!(insights.correlation.message().contains("More consistent"));
}

#[test]
fn key_insights_without_metrics_have_no_baseline() {
    let summary = summarize(&[], &[], 70.0);
    let insights = key_insights(&[], &summary).expect("nothing to parse");
    assert_eq!(insights.initial_date, None);
    assert_eq!(insights.percent_change, None);
    assert_eq!(insights.correlation, ActivityCorrelation::NeedsConsistency);
}

#[test]
fn key_insights_reject_bad_first_timestamp() {
    let metrics = vec![MetricRecord::new("15/02/2025", 75.0)];
    let summary = summarize(&metrics, &[], 70.0);
    let err = key_insights(&metrics, &summary).expect_err("unparseable date");
    assert!(matches!(err, SeriesError::InvalidTimestamp { index: 0, .. }));
}

#[test]
fn summary_serializes_with_camel_case_keys() {
    let summary = summarize(&weights(&[75.0, 73.5]), &[], 70.0);
    let json = serde_json::to_value(&summary).expect("serializable");
    assert_eq!(json["currentValue"], 73.5);
    assert_eq!(json["progressDefined"], true);
    assert_eq!(json["direction"], "lower_is_better");
}
