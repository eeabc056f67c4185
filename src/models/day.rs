//! Day-of-week value type for weekly recurring slots.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Day of the week on which an entry recurs.
///
/// Sunday is day 0. The `Ord` derive follows that numbering, which is the
/// week order the dashboard grid and the store's `(day, start)` ordering
/// contract rely on.
///
/// At the boundary the canonical representation is the upper-case English
/// name; deserialization additionally accepts the 0-6 integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// All days in week order, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Create from a 0-6 index (Sunday = 0).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DayOfWeek::Sunday),
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }

    /// 0-6 index (Sunday = 0).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Upper-case English name, the canonical wire representation.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "SUNDAY",
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
        }
    }

    /// Two-letter iCalendar BYDAY code.
    pub fn byday_code(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "SU",
            DayOfWeek::Monday => "MO",
            DayOfWeek::Tuesday => "TU",
            DayOfWeek::Wednesday => "WE",
            DayOfWeek::Thursday => "TH",
            DayOfWeek::Friday => "FR",
            DayOfWeek::Saturday => "SA",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUNDAY" => Ok(DayOfWeek::Sunday),
            "MONDAY" => Ok(DayOfWeek::Monday),
            "TUESDAY" => Ok(DayOfWeek::Tuesday),
            "WEDNESDAY" => Ok(DayOfWeek::Wednesday),
            "THURSDAY" => Ok(DayOfWeek::Thursday),
            "FRIDAY" => Ok(DayOfWeek::Friday),
            "SATURDAY" => Ok(DayOfWeek::Saturday),
            _ => Err(format!("Unknown day of week: {}", s)),
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => DayOfWeek::Sunday,
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => chrono::Weekday::Sun,
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct DayOfWeekVisitor;

impl Visitor<'_> for DayOfWeekVisitor {
    type Value = DayOfWeek;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an upper-case weekday name or an integer 0-6 (Sunday = 0)")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .ok()
            .and_then(DayOfWeek::from_index)
            .ok_or_else(|| de::Error::custom(format!("Day index out of range: {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .ok()
            .and_then(DayOfWeek::from_index)
            .ok_or_else(|| de::Error::custom(format!("Day index out of range: {}", value)))
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DayOfWeekVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::DayOfWeek;

    #[test]
    fn test_index_roundtrip() {
        for day in DayOfWeek::ALL {
            assert_eq!(DayOfWeek::from_index(day.index()), Some(day));
        }
        assert_eq!(DayOfWeek::from_index(7), None);
    }

    #[test]
    fn test_sunday_is_zero() {
        assert_eq!(DayOfWeek::Sunday.index(), 0);
        assert_eq!(DayOfWeek::Saturday.index(), 6);
        assert!(DayOfWeek::Sunday < DayOfWeek::Monday);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("MONDAY".parse::<DayOfWeek>().unwrap(), DayOfWeek::Monday);
        assert_eq!("friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert!("MONTAG".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_chrono_roundtrip() {
        for day in DayOfWeek::ALL {
            let weekday: chrono::Weekday = day.into();
            assert_eq!(DayOfWeek::from(weekday), day);
        }
    }

    #[test]
    fn test_serde_canonical_name() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "\"WEDNESDAY\"");
    }

    #[test]
    fn test_serde_accepts_name_and_index() {
        let from_name: DayOfWeek = serde_json::from_str("\"TUESDAY\"").unwrap();
        let from_index: DayOfWeek = serde_json::from_str("2").unwrap();
        assert_eq!(from_name, from_index);

        assert!(serde_json::from_str::<DayOfWeek>("7").is_err());
        assert!(serde_json::from_str::<DayOfWeek>("\"NODAY\"").is_err());
    }
}
