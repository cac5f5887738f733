//! Clock

use jiff::{Timestamp, Zoned, civil::Date};

/// Source of the current time for id assignment and listing/sale dates.
pub trait Clock: std::fmt::Debug {
    /// Seconds since the unix epoch.
    fn unix_seconds(&self) -> i64;

    /// Today's date in the local time zone.
    fn today(&self) -> Date;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        Timestamp::now().as_second()
    }

    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    unix_seconds: i64,
    today: Date,
}

impl FixedClock {
    /// Create a clock frozen at the given instant and date.
    pub fn new(unix_seconds: i64, today: Date) -> Self {
        Self {
            unix_seconds,
            today,
        }
    }
}

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.unix_seconds
    }

    fn today(&self) -> Date {
        self.today
    }
}
