//! Dashboard use-case services.
//!
//! # Responsibility
//! - Derive card-level projections from the patient record.
//! - Keep CLI/UI layers free of arithmetic and formatting rules.

pub mod biometrics;
pub mod goal_timeline;
pub mod medical_history;
pub mod recording;
