//! Injectable time source.
//!
//! Date validation and slot resolution depend on "today"; creation
//! timestamps depend on "now". Both go through the `Clock` trait so the
//! date-boundary behavior is reproducible in tests.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current date and instant.
pub trait Clock: Send + Sync {
    /// Current calendar date in the local timezone.
    fn today(&self) -> NaiveDate;

    /// Current instant, used for creation timestamps.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time source for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Pin the clock to noon UTC on the given date.
    pub fn on(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .expect("noon is a valid time")
            .and_utc();
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
