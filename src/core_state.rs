//! Shared application state for the booking workflow.
//!
//! `ClinicState` replaces the view layer's ambient shared state: the
//! doctor directory, the appointment registry, and the active search
//! filters live here and are handed to whatever drives the core (wrapped
//! in `Arc` at startup). All operations run synchronously; the `RwLock`s
//! only exist so the append invariant survives if the crate is ever
//! driven from more than one thread.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use thiserror::Error;

use crate::availability;
use crate::booking::{self, ValidationResult};
use crate::clock::{Clock, SystemClock};
use crate::confirmation::ConfirmationDetails;
use crate::directory::{Directory, SeedError};
use crate::models::{Appointment, BookingCandidate, Doctor, DoctorFilter};
use crate::registry::AppointmentRegistry;

/// Errors from ClinicState operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

/// Result of submitting a booking: the workflow either confirms the
/// appointment or hands the field errors back for re-editing.
#[derive(Debug)]
pub enum BookingOutcome {
    Confirmed(Appointment),
    Rejected(ValidationResult),
}

pub struct ClinicState {
    directory: Directory,
    registry: RwLock<AppointmentRegistry>,
    filters: RwLock<DoctorFilter>,
    clock: Arc<dyn Clock>,
}

impl ClinicState {
    /// Seeded state on the system clock.
    pub fn new() -> Result<Self, CoreError> {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Seeded state on an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Result<Self, CoreError> {
        Ok(Self::with_directory(Directory::from_seed()?, clock))
    }

    /// State over an explicit directory (tests, alternate seeds).
    pub fn with_directory(directory: Directory, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            registry: RwLock::new(AppointmentRegistry::new()),
            filters: RwLock::new(DoctorFilter::default()),
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // ── Directory (read path) ───────────────────────────────

    /// All doctors in seed order.
    pub fn list_doctors(&self) -> &[Doctor] {
        self.directory.list()
    }

    /// Exact-match lookup; `None` means "nothing to display", not a fault.
    pub fn find_doctor(&self, id: &str) -> Option<&Doctor> {
        self.directory.get(id)
    }

    /// Distinct specializations for the filter dropdown.
    pub fn specializations(&self) -> Vec<String> {
        self.directory.specializations()
    }

    // ── Availability ────────────────────────────────────────

    /// Bookable slots for a doctor on a date. Unknown doctors and
    /// unpopulated weekdays both resolve to an empty list.
    pub fn slots_for(&self, doctor_id: &str, date: NaiveDate) -> Vec<String> {
        self.directory
            .get(doctor_id)
            .map(|doctor| availability::slots_for(doctor, date))
            .unwrap_or_default()
    }

    /// Dates offered in the booking form (today plus the booking window).
    pub fn booking_dates(&self) -> Vec<NaiveDate> {
        availability::booking_dates(self.clock.as_ref())
    }

    // ── Booking workflow ────────────────────────────────────

    /// Validate a candidate without recording anything.
    pub fn validate_booking(&self, candidate: &BookingCandidate) -> ValidationResult {
        booking::validate(candidate, self.clock.as_ref())
    }

    /// Record an already-validated candidate.
    ///
    /// Preconditions: the candidate passed [`Self::validate_booking`];
    /// the registry does not re-validate.
    pub fn record_appointment(
        &self,
        candidate: &BookingCandidate,
    ) -> Result<Appointment, CoreError> {
        let mut registry = self.registry.write().map_err(|_| CoreError::LockPoisoned)?;
        Ok(registry.record(candidate, self.clock.as_ref()))
    }

    /// Full submission workflow: validate, then either record and confirm
    /// or hand back the field errors.
    pub fn submit_booking(
        &self,
        candidate: &BookingCandidate,
    ) -> Result<BookingOutcome, CoreError> {
        let result = self.validate_booking(candidate);
        if result.is_valid() {
            Ok(BookingOutcome::Confirmed(
                self.record_appointment(candidate)?,
            ))
        } else {
            tracing::debug!(fields = result.errors.len(), "Booking rejected");
            Ok(BookingOutcome::Rejected(result))
        }
    }

    /// All recorded appointments in submission order.
    pub fn list_appointments(&self) -> Result<Vec<Appointment>, CoreError> {
        let registry = self.registry.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(registry.list().to_vec())
    }

    /// Display summary for a recorded appointment; `None` when the
    /// referenced doctor is unknown.
    pub fn confirmation_for(&self, appointment: &Appointment) -> Option<ConfirmationDetails> {
        self.directory
            .get(&appointment.doctor_id)
            .map(|doctor| ConfirmationDetails::new(doctor, appointment))
    }

    // ── Search filters ──────────────────────────────────────

    pub fn set_search_query(&self, query: &str) -> Result<(), CoreError> {
        let mut filters = self.filters.write().map_err(|_| CoreError::LockPoisoned)?;
        filters.query = query.to_string();
        tracing::debug!(query, "Search query updated");
        Ok(())
    }

    pub fn set_specialization(&self, specialization: &str) -> Result<(), CoreError> {
        let mut filters = self.filters.write().map_err(|_| CoreError::LockPoisoned)?;
        filters.specialization = specialization.to_string();
        tracing::debug!(specialization, "Specialization filter updated");
        Ok(())
    }

    /// Snapshot of the active filters.
    pub fn filters(&self) -> Result<DoctorFilter, CoreError> {
        let filters = self.filters.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(filters.clone())
    }

    /// Doctors matching the active filters, in seed order.
    pub fn filtered_doctors(&self) -> Result<Vec<&Doctor>, CoreError> {
        let filters = self.filters.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(self.directory.filtered(&filters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingField;
    use crate::clock::FixedClock;
    use crate::models::AppointmentStatus;

    /// State pinned to Friday 2026-07-03; the next Monday is 2026-07-06.
    fn state() -> ClinicState {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2026, 7, 3).unwrap());
        ClinicState::with_clock(Arc::new(clock)).unwrap()
    }

    fn monday_candidate() -> BookingCandidate {
        BookingCandidate {
            doctor_id: "1".into(),
            patient_name: "Jane Doe".into(),
            patient_email: "jane@example.com".into(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 7, 6),
            appointment_time: Some("09:00".into()),
        }
    }

    #[test]
    fn lists_seeded_doctors() {
        let state = state();
        assert_eq!(state.list_doctors().len(), 6);
        assert_eq!(state.find_doctor("1").unwrap().name, "Dr. Sarah Johnson");
        assert!(state.find_doctor("missing").is_none());
    }

    #[test]
    fn slots_for_unknown_doctor_is_empty() {
        let state = state();
        let monday = NaiveDate::from_ymd_opt(2026, 7, 6).unwrap();
        assert!(state.slots_for("missing", monday).is_empty());
    }

    #[test]
    fn monday_booking_end_to_end() {
        let state = state();
        let monday = NaiveDate::from_ymd_opt(2026, 7, 6).unwrap();

        let slots = state.slots_for("1", monday);
        assert_eq!(slots, vec!["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"]);
        assert!(slots.contains(&"09:00".to_string()));

        let candidate = monday_candidate();
        let result = state.validate_booking(&candidate);
        assert!(result.is_valid());

        let appointment = state.record_appointment(&candidate).unwrap();
        assert!(!appointment.id.is_empty());
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.appointment_date, monday);

        let appointments = state.list_appointments().unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].id, appointment.id);
    }

    #[test]
    fn submit_booking_confirms_valid_candidate() {
        let state = state();
        match state.submit_booking(&monday_candidate()).unwrap() {
            BookingOutcome::Confirmed(appointment) => {
                assert_eq!(appointment.patient_name, "Jane Doe");
            }
            BookingOutcome::Rejected(result) => {
                panic!("expected confirmation, got errors: {:?}", result.errors)
            }
        }
        assert_eq!(state.list_appointments().unwrap().len(), 1);
    }

    #[test]
    fn submit_booking_rejects_without_recording() {
        let state = state();
        let candidate = BookingCandidate {
            doctor_id: "1".into(),
            ..Default::default()
        };

        match state.submit_booking(&candidate).unwrap() {
            BookingOutcome::Rejected(result) => {
                assert!(result.error(BookingField::PatientName).is_some());
                assert!(result.error(BookingField::PatientEmail).is_some());
                assert!(result.error(BookingField::AppointmentDate).is_some());
                assert!(result.error(BookingField::AppointmentTime).is_some());
            }
            BookingOutcome::Confirmed(_) => panic!("empty candidate must not confirm"),
        }
        assert!(state.list_appointments().unwrap().is_empty());
    }

    #[test]
    fn resubmission_after_errors_succeeds() {
        let state = state();

        let mut candidate = monday_candidate();
        candidate.patient_email = "not-an-email".into();
        assert!(matches!(
            state.submit_booking(&candidate).unwrap(),
            BookingOutcome::Rejected(_)
        ));

        candidate.patient_email = "jane@example.com".into();
        assert!(matches!(
            state.submit_booking(&candidate).unwrap(),
            BookingOutcome::Confirmed(_)
        ));
        assert_eq!(state.list_appointments().unwrap().len(), 1);
    }

    #[test]
    fn appointments_keep_submission_order() {
        let state = state();
        for name in ["Jane Doe", "John Smith", "Ana Silva"] {
            let mut candidate = monday_candidate();
            candidate.patient_name = name.into();
            state.record_appointment(&candidate).unwrap();
        }

        let names: Vec<String> = state
            .list_appointments()
            .unwrap()
            .into_iter()
            .map(|a| a.patient_name)
            .collect();
        assert_eq!(names, vec!["Jane Doe", "John Smith", "Ana Silva"]);
    }

    #[test]
    fn booking_dates_use_injected_clock() {
        let state = state();
        let dates = state.booking_dates();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 7, 3).unwrap());
    }

    #[test]
    fn confirmation_for_recorded_appointment() {
        let state = state();
        let appointment = state.record_appointment(&monday_candidate()).unwrap();

        let details = state.confirmation_for(&appointment).unwrap();
        assert_eq!(details.doctor_name, "Dr. Sarah Johnson");
        assert_eq!(details.date_display, "Monday, July 6, 2026");
        assert_eq!(details.time_display, "9:00 AM");

        let mut orphan = appointment;
        orphan.doctor_id = "missing".into();
        assert!(state.confirmation_for(&orphan).is_none());
    }

    #[test]
    fn filters_flow_through_state() {
        let state = state();

        state.set_search_query("derm").unwrap();
        let matches = state.filtered_doctors().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Dr. Michael Chen");

        state.set_search_query("").unwrap();
        state.set_specialization("Pediatrician").unwrap();
        let matches = state.filtered_doctors().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "3");

        state.set_specialization("").unwrap();
        assert_eq!(state.filtered_doctors().unwrap().len(), 6);

        let filters = state.filters().unwrap();
        assert!(filters.query.is_empty());
        assert!(filters.specialization.is_empty());
    }

    #[test]
    fn specializations_come_from_directory() {
        let state = state();
        let specializations = state.specializations();
        assert_eq!(specializations.len(), 6);
        assert_eq!(specializations[0], "Cardiologist");
    }

    #[test]
    fn concurrent_reads_do_not_block() {
        use std::thread;

        let state = Arc::new(state());
        let mut handles = vec![];

        for _ in 0..10 {
            let state = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                assert_eq!(state.list_doctors().len(), 6);
                assert!(state.list_appointments().unwrap().is_empty());
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn core_error_display() {
        assert_eq!(CoreError::LockPoisoned.to_string(), "Internal lock error");
    }
}
