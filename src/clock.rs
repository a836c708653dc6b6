use chrono::{DateTime, FixedOffset, Local};

/// Supplies the request time used for ids and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall-clock time.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Formats `at` the way mail clients show a received time, e.g. `Oct 17, 3:04 PM`.
pub fn email_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format("%b %-d, %-I:%M %p").to_string()
}
