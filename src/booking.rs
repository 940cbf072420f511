//! Booking Validator — per-field validation of a candidate appointment
//! request.
//!
//! Every rule is evaluated independently so the caller can surface all
//! failing fields at once. Validation failures are data, not errors: the
//! result carries human-readable messages keyed by field.
//!
//! The validator deliberately does not cross-check the chosen time against
//! the doctor's slot list for that date — the presented options are
//! pre-filtered by the caller, and two patients may still book the same
//! doctor/date/time triple. Both gaps are accepted in this scope.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::models::BookingCandidate;

/// Matches `local@domain.tld` where no part contains whitespace or `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Form fields a validation message can attach to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum BookingField {
    #[serde(rename = "patientName")]
    PatientName,
    #[serde(rename = "patientEmail")]
    PatientEmail,
    #[serde(rename = "appointmentDate")]
    AppointmentDate,
    #[serde(rename = "appointmentTime")]
    AppointmentTime,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatientName => "patientName",
            Self::PatientEmail => "patientEmail",
            Self::AppointmentDate => "appointmentDate",
            Self::AppointmentTime => "appointmentTime",
        }
    }
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating a candidate: valid iff no field has a message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub errors: BTreeMap<BookingField, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for one field, if it failed.
    pub fn error(&self, field: BookingField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Validate a candidate appointment request.
///
/// Date comparison is calendar-only against `clock.today()`: today itself
/// is accepted, yesterday is not.
pub fn validate(candidate: &BookingCandidate, clock: &dyn Clock) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if candidate.patient_name.trim().is_empty() {
        errors.insert(
            BookingField::PatientName,
            "Patient name is required".to_string(),
        );
    }

    if candidate.patient_email.trim().is_empty() {
        errors.insert(BookingField::PatientEmail, "Email is required".to_string());
    } else if !EMAIL_RE.is_match(&candidate.patient_email) {
        errors.insert(
            BookingField::PatientEmail,
            "Please enter a valid email address".to_string(),
        );
    }

    match candidate.appointment_date {
        None => {
            errors.insert(
                BookingField::AppointmentDate,
                "Please select an appointment date".to_string(),
            );
        }
        Some(date) if date < clock.today() => {
            errors.insert(
                BookingField::AppointmentDate,
                "Please select a future date".to_string(),
            );
        }
        Some(_) => {}
    }

    let time_unset = candidate
        .appointment_time
        .as_deref()
        .map(|time| time.is_empty())
        .unwrap_or(true);
    if time_unset {
        errors.insert(
            BookingField::AppointmentTime,
            "Please select an appointment time".to_string(),
        );
    }

    ValidationResult { errors }
}
