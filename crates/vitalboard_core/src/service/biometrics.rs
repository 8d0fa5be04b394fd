//! Biometric projections for the health-metrics card.
//!
//! # Responsibility
//! - Recompute BMI from height/weight instead of trusting the stored value.
//! - Bucket BMI and health score into display categories.
//!
//! # Invariants
//! - BMI is rounded to one decimal before categorization.

use crate::model::patient::Biometrics;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BiometricsError {
    /// Height must be a positive number of centimetres.
    NonPositiveHeight(f64),
}

impl Display for BiometricsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveHeight(height) => {
                write!(f, "height must be positive, got {height} cm")
            }
        }
    }
}

impl Error for BiometricsError {}

/// Body-mass index category (WHO adult cut-offs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Display bucket of a 0..=100 health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl HealthScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Average,
            _ => Self::Poor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }
}

/// Derived view of the stored biometrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricSummary {
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Rounded to one decimal.
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub health_score: u8,
    pub health_band: HealthScoreBand,
}

/// Computes BMI from centimetres and kilograms, rounded to one decimal.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<f64, BiometricsError> {
    if !(height_cm > 0.0) {
        return Err(BiometricsError::NonPositiveHeight(height_cm));
    }
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    Ok((raw * 10.0).round() / 10.0)
}

pub fn summarize_biometrics(biometrics: &Biometrics) -> Result<BiometricSummary, BiometricsError> {
    let bmi = bmi(biometrics.height, biometrics.weight)?;
    Ok(BiometricSummary {
        height_cm: biometrics.height,
        weight_kg: biometrics.weight,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        health_score: biometrics.health_score,
        health_band: HealthScoreBand::from_score(biometrics.health_score),
    })
}
