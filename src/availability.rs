//! Availability Resolver — maps calendar dates onto a doctor's recurring
//! weekly schedule.
//!
//! Pure reads only. Absence of a doctor, weekday, or slot list always
//! resolves to "no availability", never to an error.

use chrono::{Duration, NaiveDate};

use crate::clock::Clock;
use crate::config;
use crate::models::{Doctor, Weekday};

/// Bookable slot start times for the given doctor on the given date.
///
/// Deterministic in the doctor's schedule and the date's weekday; an
/// unpopulated weekday yields an empty list.
pub fn slots_for(doctor: &Doctor, date: NaiveDate) -> Vec<String> {
    doctor.schedule.slots_on(Weekday::from_date(date)).to_vec()
}

/// The dates offered in the booking form: today plus the following days
/// of the booking window.
pub fn booking_dates(clock: &dyn Clock) -> Vec<NaiveDate> {
    let today = clock.today();
    (0..config::BOOKING_WINDOW_DAYS)
        .map(|offset| today + Duration::days(offset))
        .collect()
}

/// 12-hour display form of an `HH:MM` slot ("14:00" → "2:00 PM").
///
/// Falls back to the input unchanged when it is not `HH:MM`.
pub fn format_slot(time: &str) -> String {
    let Some((hour, minute)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hour.parse::<u32>() else {
        return time.to_string();
    };

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute} {meridiem}")
}
