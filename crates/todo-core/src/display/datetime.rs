//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` formatted as `YYYY-MM-DD HH:MM:SS TZ` in a time zone.
///
/// [`LocalDateTime::new`] uses the system time zone.
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    tz: TimeZone,
}

impl<'a> LocalDateTime<'a> {
    /// Format in the system time zone.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    /// Format in the given time zone.
    pub fn in_zone(timestamp: &'a Timestamp, tz: TimeZone) -> Self {
        Self { timestamp, tz }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.tz.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
