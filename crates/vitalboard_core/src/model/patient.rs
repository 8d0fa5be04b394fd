//! Patient record model.
//!
//! # Responsibility
//! - Mirror the embedded patient document field-for-field.
//! - Keep free-form sections (`Record<string, any>` style maps) as raw JSON.
//!
//! # Invariants
//! - The record is a read-only snapshot; nothing in core mutates it.
//! - Nullable wire fields are `Option`, never sentinel values.

use crate::model::series::{ActionRecord, MetricRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form JSON object section.
pub type FreeformMap = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub profile_data: ProfileData,
    pub health_goal: HealthGoal,
    pub time_series: TimeSeries,
    pub medical_reviews: MedicalReviews,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub demographics: Demographics,
    pub genetic_proxies: GeneticProxies,
    pub environment: Environment,
    pub lifestyle: Lifestyle,
    pub clinical_status: ClinicalStatus,
    pub temporal_context: TemporalContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub id: u32,
    pub name: String,
    /// Plain `YYYY-MM-DD` date.
    pub date_of_birth: String,
    /// Age as provided by the source record (string on the wire).
    pub age: String,
    pub gender: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country_code: String,
    #[serde(default)]
    pub geo_risks: FreeformMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticProxies {
    pub blood_type: String,
    #[serde(default)]
    pub family_history: FreeformMap,
    #[serde(default)]
    pub phenotypic_markers: Vec<Value>,
    #[serde(default)]
    pub medication_sensitivities: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub occupational_risks: FreeformMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub circadian_rhythm: String,
    #[serde(default)]
    pub nutrition: FreeformMap,
    #[serde(default)]
    pub activity: FreeformMap,
    #[serde(default)]
    pub social_history: FreeformMap,
    pub biometrics: Biometrics,
}

/// Body measurements as stored on the record.
///
/// The stored `bmi` is not trusted; views recompute it from height/weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub bmi: f64,
    /// 0..=100.
    pub health_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalStatus {
    #[serde(default)]
    pub chronic_conditions: Vec<Value>,
    #[serde(default)]
    pub peculiarities: Vec<Value>,
    #[serde(default)]
    pub medications: FreeformMap,
    pub care_team: CareTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareTeam {
    pub primary_doctor: Doctor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub clinic_name: String,
    pub specialty: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalContext {
    pub current_time: String,
    pub patient_local_time: String,
    pub timezone: String,
}

/// Care-plan goal with the metrics and actions it tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGoal {
    pub goal_name: String,
    pub target_date: String,
    pub comments: String,
    #[serde(default)]
    pub metrics: Vec<GoalMetric>,
    #[serde(default)]
    pub actions: Vec<GoalAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMetric {
    pub metric_name: String,
    pub unit: String,
    /// Measurement interval in hours.
    pub interval: u32,
    pub target_value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAction {
    pub name: String,
    pub description: String,
    /// Repeat interval in hours; `0` means "as needed".
    pub interval: u32,
    pub action_end_date: String,
}

/// Tracked goal with its metric and action streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub goal_details: GoalDetails,
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricSeries>,
    #[serde(default)]
    pub actions: BTreeMap<String, ActionSeries>,
}

impl TimeSeries {
    /// Returns the metric stream the goal targets.
    ///
    /// Falls back to the first stream by name when `target_metric` has no
    /// matching key.
    pub fn primary_metric(&self) -> Option<(&str, &MetricSeries)> {
        self.metrics
            .get_key_value(self.goal_details.target_metric.as_str())
            .or_else(|| self.metrics.iter().next())
            .map(|(name, series)| (name.as_str(), series))
    }

    /// Returns the first action stream by name.
    pub fn primary_action(&self) -> Option<(&str, &ActionSeries)> {
        self.actions
            .iter()
            .next()
            .map(|(name, series)| (name.as_str(), series))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDetails {
    pub goal_name: String,
    pub target_date: String,
    pub comments: String,
    /// Key into `TimeSeries::metrics`.
    pub target_metric: String,
    pub target_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub details: MetricDetails,
    #[serde(default)]
    pub records: Vec<MetricRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDetails {
    pub metric_name: String,
    pub unit: String,
    /// Days between expected readings.
    pub measurement_interval: u32,
    pub measurement_type: String,
    pub target_value: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSeries {
    pub details: ActionDetails,
    #[serde(default)]
    pub records: Vec<ActionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDetails {
    pub name: String,
    pub description: String,
    /// Days between expected occurrences.
    pub interval: u32,
    pub action_end_date: String,
    pub precision_type: String,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalReviews {
    #[serde(default)]
    pub medical_history: Vec<MedicalRecord>,
}

/// One clinical review visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: u32,
    pub patient: u32,
    pub doctor: u32,
    pub chief_complaint: String,
    pub history_of_present_illness: String,
    pub assessment_diagnosis: String,
    pub status: String,
    pub management_plan: String,
    pub lifestyle_advice: String,
    pub patient_education: String,
    pub follow_up_plan: String,
    pub treatment_goal: String,
    pub health_score: Option<u8>,
    pub review_status: String,
    pub report_url: Option<String>,
    pub pre_report_url: Option<String>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u32,
    #[serde(default)]
    pub prescription_items: Vec<PrescriptionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionItem {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub route: String,
    pub instructions: String,
}
