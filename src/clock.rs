//! Time-of-day arithmetic on a 24-hour cycle.
//!
//! Every boundary in a prayer schedule is a bare `HH:MM` with no date, so any
//! interval between two of them may cross midnight. The helpers here normalise
//! such intervals so plain integer comparison applies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub const MINUTES_PER_DAY: u32 = 1440;
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// The synthetic boundary that closes the Isha period.
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
    };

    pub fn new(hour: u8, minute: u8) -> Result<Self, EngineError> {
        if hour > 23 || minute > 59 {
            return Err(EngineError::InvalidFormat {
                input: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Build from minutes since midnight, wrapping values past the end of the day.
    pub fn from_minutes(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn to_minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Shift by `delta` minutes, wrapping around midnight in either direction.
    pub fn add_minutes(self, delta: i64) -> Self {
        Self::from_minutes(add_wrap(self.to_minutes(), delta))
    }

    pub fn to_time(&self) -> time::Time {
        // Fields are range-checked at construction.
        time::Time::from_hms(self.hour, self.minute, 0).unwrap_or(time::Time::MIDNIGHT)
    }

    /// Render as `hh:mm AM`/`hh:mm PM`.
    pub fn to_twelve_hour(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", hour, self.minute, suffix)
    }
}

impl From<time::Time> for ClockTime {
    fn from(t: time::Time) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    /// Parse `HH:MM`. Anything after the first whitespace is ignored, so
    /// zone-annotated values such as `04:58 (+06)` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidFormat {
            input: s.to_string(),
        };

        let token = s.split_whitespace().next().ok_or_else(invalid)?;
        let (h, m) = token.split_once(':').ok_or_else(invalid)?;
        let hour = parse_field(h).ok_or_else(invalid)?;
        let minute = parse_field(m).ok_or_else(invalid)?;

        Self::new(hour, minute).map_err(|_| invalid())
    }
}

fn parse_field(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Modulo-1440 addition of a signed minute offset.
pub fn add_wrap(minutes: u32, delta: i64) -> u32 {
    (minutes as i64 + delta).rem_euclid(MINUTES_PER_DAY as i64) as u32
}

/// Unroll a possibly midnight-crossing interval onto a straight line.
///
/// When `end < start` the interval wraps, so `end` moves forward one cycle and
/// so does `point` if it lies before `start`. The returned triple can then be
/// compared with ordinary operators.
pub fn unwrap_interval(start: u32, end: u32, point: u32, cycle: u32) -> (u32, u32, u32) {
    if end < start {
        let point = if point < start { point + cycle } else { point };
        (start, end + cycle, point)
    } else {
        (start, end, point)
    }
}

/// Whether `point` lies in `[start, end)`, all in minutes since midnight.
pub fn contains(start: u32, end: u32, point: u32) -> bool {
    let (s, e, p) = unwrap_interval(start, end, point, MINUTES_PER_DAY);
    p >= s && p < e
}

/// Seconds since midnight for a `time::Time`, dropping sub-second precision.
pub fn seconds_of_day(t: time::Time) -> u32 {
    t.hour() as u32 * 3600 + t.minute() as u32 * 60 + t.second() as u32
}
