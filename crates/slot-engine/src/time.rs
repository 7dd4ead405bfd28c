//! Time-of-day value type -- typed arithmetic behind the `HH:MM` wire strings.
//!
//! Working hours and slots are exchanged as zero-padded 24-hour `HH:MM`
//! strings. Internally a time of day is minutes since local midnight, which
//! gives a total order and interval stepping without manual modulo/padding
//! arithmetic on strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SlotError;

/// A time of day as minutes since local midnight.
///
/// Values at or past 24:00 can arise from [`TimeOfDay::advance`] when a
/// stepping loop walks off the end of the day; they compare greater than any
/// parseable time and never map to an instant. Parsing only accepts
/// `00:00`..=`23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour and minute components. `None` outside `00:00`..=`23:59`.
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour as u16 * 60 + minute as u16))
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Step forward by `minutes`, rolling minute overflow into the hour.
    /// May step past 23:59; the result then only serves as a loop bound.
    pub const fn advance(self, minutes: u16) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Resolve this time of day on a calendar date in the given timezone to
    /// an absolute UTC instant.
    ///
    /// A DST-ambiguous local time maps to its earliest occurrence; a time
    /// inside a DST gap (or a value past 23:59) has no instant and yields
    /// `None`.
    pub fn on(self, date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
        let time = NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)?;
        date.and_time(time)
            .and_local_timezone(tz)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Strict `HH:MM` parse: exactly five characters, zero-padded, 24-hour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(SlotError::InvalidTime(s.to_string()));
        }
        let digits = |a: u8, b: u8| -> Option<u8> {
            if a.is_ascii_digit() && b.is_ascii_digit() {
                Some((a - b'0') * 10 + (b - b'0'))
            } else {
                None
            }
        };
        let hour = digits(bytes[0], bytes[1]);
        let minute = digits(bytes[3], bytes[4]);
        match (hour, minute) {
            (Some(h), Some(m)) => {
                Self::from_hm(h, m).ok_or_else(|| SlotError::InvalidTime(s.to_string()))
            }
            _ => Err(SlotError::InvalidTime(s.to_string())),
        }
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
