// 🕰️ Clock - where "today" comes from
//
// Age is derived from the birth date and the current date at call time.
// The clock is a seam so callers (and tests) can pin the reference date.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always answers the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
