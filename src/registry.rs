//! Appointment Registry — in-memory, append-only collection of confirmed
//! appointments.
//!
//! Holds process-memory state only; everything is lost on restart. There
//! are no update, removal, or per-doctor query operations, but the full
//! ordered list stays retrievable.

use uuid::Uuid;

use crate::clock::Clock;
use crate::models::{Appointment, AppointmentStatus, BookingCandidate};

#[derive(Debug, Default)]
pub struct AppointmentRegistry {
    appointments: Vec<Appointment>,
}

impl AppointmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated candidate as a confirmed appointment.
    ///
    /// Assigns a fresh UUID, sets status to `confirmed`, stamps the
    /// creation instant from the clock, and appends. The candidate is
    /// trusted to have passed the booking validator; debug builds assert
    /// that date and time are set, release builds fall back to today and
    /// an empty time. No deduplication happens: the same
    /// doctor/date/time triple can be recorded twice.
    pub fn record(&mut self, candidate: &BookingCandidate, clock: &dyn Clock) -> Appointment {
        debug_assert!(
            candidate.appointment_date.is_some(),
            "candidate must pass validation before recording: date unset"
        );
        debug_assert!(
            candidate
                .appointment_time
                .as_deref()
                .is_some_and(|time| !time.is_empty()),
            "candidate must pass validation before recording: time unset"
        );

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            doctor_id: candidate.doctor_id.clone(),
            patient_name: candidate.patient_name.clone(),
            patient_email: candidate.patient_email.clone(),
            appointment_date: candidate.appointment_date.unwrap_or_else(|| clock.today()),
            appointment_time: candidate.appointment_time.clone().unwrap_or_default(),
            status: AppointmentStatus::Confirmed,
            created_at: clock.now().to_rfc3339(),
        };

        tracing::info!(
            appointment_id = %appointment.id,
            doctor_id = %appointment.doctor_id,
            date = %appointment.appointment_date,
            time = %appointment.appointment_time,
            "Appointment recorded"
        );

        self.appointments.push(appointment.clone());
        appointment
    }

    /// All appointments in submission order.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
