//! Embedded patient dataset.
//!
//! # Responsibility
//! - Ship the static patient record inside the core crate.
//! - Hand the record to callers as an owned value, not a global.
//!
//! # Invariants
//! - The embedded document must deserialize into `Patient`; a failure is a
//!   build-content defect reported as `DatasetError`.

use crate::model::patient::Patient;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BUILTIN_PATIENT_JSON: &str = include_str!("../data/patient.json");

#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid patient document: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Loads the embedded patient record.
pub fn builtin_patient() -> Result<Patient, DatasetError> {
    let patient = parse_patient(BUILTIN_PATIENT_JSON)?;
    info!(
        "event=dataset_load module=dataset status=ok patient_id={} reviews={}",
        patient.id,
        patient.medical_reviews.medical_history.len()
    );
    Ok(patient)
}

/// Parses a patient record from a JSON document.
pub fn parse_patient(json: &str) -> Result<Patient, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::{builtin_patient, parse_patient, DatasetError};
    use std::error::Error;

    #[test]
    fn builtin_document_parses() {
        let patient = builtin_patient().expect("embedded dataset should parse");
        assert_eq!(patient.id, 1);
    }

    #[test]
    fn parse_error_keeps_serde_source() {
        let err = parse_patient("{\"id\": 1}").expect_err("incomplete document must fail");
        assert!(matches!(err, DatasetError::Parse(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid patient document"));
    }
}
