//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` formatted in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Short weekday, day and month of an epoch-millisecond date, e.g.
/// `Sat, 15 Jun`.
///
/// Formats nothing when the value is outside the supported range.
pub struct ShortDate<'a> {
    pub epoch_millis: i64,
    pub time_zone: &'a TimeZone,
}

impl<'a> ShortDate<'a> {
    pub fn new(epoch_millis: i64, time_zone: &'a TimeZone) -> Self {
        Self {
            epoch_millis,
            time_zone,
        }
    }
}

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(timestamp) = Timestamp::from_millisecond(self.epoch_millis) else {
            return Ok(());
        };
        let zoned = timestamp.to_zoned(self.time_zone.clone());
        write!(
            f,
            "{}, {} {}",
            zoned.strftime("%a"),
            zoned.day(),
            zoned.strftime("%b")
        )
    }
}
