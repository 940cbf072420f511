//! Core data types: doctors, weekly schedules, appointments, and the
//! candidate/filter types the booking flow works with.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ─── String-backed enums ──────────────────────────────────────────────────────

/// Macro to generate an enum with a fixed wire string per variant
/// (serde form + as_str + Display).
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Headline availability shown on a doctor card. Informational only —
    /// bookable slots come from the weekly schedule, not from this flag.
    AvailabilityStatus {
        Available => "available",
        Busy => "busy",
        OnLeave => "on-leave",
    }
);

impl AvailabilityStatus {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available Today",
            Self::Busy => "Limited Slots",
            Self::OnLeave => "Currently Unavailable",
        }
    }
}

str_enum!(
    /// Appointment lifecycle status. Creation always yields `Confirmed`;
    /// `Pending` and `Cancelled` are valid states kept for forward
    /// compatibility but no in-scope operation produces them.
    AppointmentStatus {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
    }
);

// ─── Weekday ──────────────────────────────────────────────────────────────────

/// Calendar weekday used to key a doctor's recurring schedule.
///
/// An enum rather than a free string: a misspelled day in seed data fails
/// deserialization instead of silently resolving to "no slots".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }

    /// English full name, matching the serde wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Weekly schedule ──────────────────────────────────────────────────────────

/// Recurring weekly schedule: bookable `HH:MM` slot start times per weekday.
///
/// Slot lists keep their source order (conventionally ascending, not
/// guaranteed). A day without an entry resolves to no slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<Weekday, Vec<String>>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot start times for the given weekday; empty for an absent day.
    pub fn slots_on(&self, day: Weekday) -> &[String] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the slot list for one weekday.
    pub fn set(&mut self, day: Weekday, slots: Vec<String>) {
        self.0.insert(day, slots);
    }

    /// Ensure all seven weekday keys exist, inserting empty lists as needed.
    pub fn fill_missing_days(&mut self) {
        for day in Weekday::ALL {
            self.0.entry(day).or_default();
        }
    }

    pub fn has_slots_on(&self, day: Weekday) -> bool {
        !self.slots_on(day).is_empty()
    }

    /// True when no weekday has any slots (e.g. a doctor on leave).
    pub fn is_empty_week(&self) -> bool {
        Weekday::ALL.iter().all(|day| self.slots_on(*day).is_empty())
    }
}

// ─── Doctor ───────────────────────────────────────────────────────────────────

/// A doctor record. Immutable after seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    /// Portrait URI for the card/profile views.
    pub image: String,
    pub availability: AvailabilityStatus,
    /// Years of experience.
    pub experience: u32,
    /// 0.0–5.0.
    pub rating: f64,
    pub location: String,
    pub about: String,
    pub education: Vec<String>,
    pub schedule: WeeklySchedule,
    pub consultation_fee: u32,
}

// ─── Appointment ──────────────────────────────────────────────────────────────

/// A confirmed appointment. Created once via the registry, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub appointment_date: NaiveDate,
    /// `HH:MM` slot start time.
    pub appointment_time: String,
    pub status: AppointmentStatus,
    /// RFC 3339 creation instant.
    pub created_at: String,
}

/// A caller-submitted, not-yet-validated appointment request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingCandidate {
    pub doctor_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<String>,
}

// ─── Directory filter ─────────────────────────────────────────────────────────

/// Active search filters for the doctor list. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorFilter {
    /// Case-insensitive substring match against name or specialization.
    pub query: String,
    /// Exact specialization match.
    pub specialization: String,
}

impl DoctorFilter {
    pub fn matches(&self, doctor: &Doctor) -> bool {
        let matches_query = self.query.is_empty() || {
            let query = self.query.to_lowercase();
            doctor.name.to_lowercase().contains(&query)
                || doctor.specialization.to_lowercase().contains(&query)
        };

        let matches_specialization =
            self.specialization.is_empty() || doctor.specialization == self.specialization;

        matches_query && matches_specialization
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
