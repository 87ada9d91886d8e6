//! Time source for record timestamps and calendar-day windows.
//!
//! Record timestamps are absolute instants; "which day" a record belongs to
//! is always answered in the clock's time zone so that totals and chart
//! buckets agree with each other.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;

pub trait Clock {
    fn now(&self) -> Timestamp;

    fn time_zone(&self) -> TimeZone;

    /// Calendar date of `timestamp` in this clock's zone
    fn local_date(&self, timestamp: Timestamp) -> Date {
        timestamp.to_zoned(self.time_zone()).date()
    }

    fn today(&self) -> Date {
        self.local_date(self.now())
    }
}

/// Wall clock in the system time zone
#[derive(Debug, Clone)]
pub struct SystemClock {
    tz: TimeZone,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            tz: TimeZone::system(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn time_zone(&self) -> TimeZone {
        self.tz.clone()
    }
}

/// A clock stopped at one instant. Used by tests and benchmarks.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Timestamp,
    tz: TimeZone,
}

impl FixedClock {
    pub fn new(now: Timestamp, tz: TimeZone) -> Self {
        Self { now, tz }
    }

    pub fn utc(now: Timestamp) -> Self {
        Self::new(now, TimeZone::UTC)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn time_zone(&self) -> TimeZone {
        self.tz.clone()
    }
}
