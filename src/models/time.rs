//! Minute-granularity time-of-day values.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wall-clock time of day with minute granularity.
///
/// Stored as minute-of-day (0..=1439) so comparisons are plain integer
/// comparisons. The wire representation is a zero-padded 24-hour `"HH:MM"`
/// string; unpadded forms such as `"9:00"` are rejected rather than
/// normalized, so there is exactly one accepted spelling per instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Create from hour and minute components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Create from a minute-of-day value.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < Self::MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Minute-of-day value.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Convert to a chrono NaiveTime (seconds are always zero).
    pub fn to_naive_time(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(chrono::NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Parse a zero-padded `"HH:MM"` string. Any other shape is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(format!("Expected zero-padded HH:MM, got {:?}", s));
        }
        if !bytes[0].is_ascii_digit()
            || !bytes[1].is_ascii_digit()
            || !bytes[3].is_ascii_digit()
            || !bytes[4].is_ascii_digit()
        {
            return Err(format!("Expected zero-padded HH:MM, got {:?}", s));
        }

        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        TimeOfDay::new(hour, minute).ok_or_else(|| format!("Time out of range: {:?}", s))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
