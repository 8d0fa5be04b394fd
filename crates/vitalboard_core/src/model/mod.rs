//! Domain model for the patient dashboard.
//!
//! # Responsibility
//! - Define the typed patient record loaded from the embedded dataset.
//! - Define time-series records and the reconciled chart point shape.
//!
//! # Invariants
//! - Model types carry data only; derivations live in `series` and `service`.

pub mod patient;
pub mod series;
