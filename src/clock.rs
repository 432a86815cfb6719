//! Source of "today" for the birthday query.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
///
/// The assistant asks the clock instead of reading the system time directly,
/// so sessions can be replayed against a fixed day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local date of the machine running the assistant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
