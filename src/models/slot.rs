//! Weekly-recurring interval value type.

use serde::{Deserialize, Serialize};

use super::day::DayOfWeek;
use super::time::TimeOfDay;
use crate::error::{TimetableError, TimetableResult};

/// A `(day, start, end)` interval recurring every week.
///
/// The interval is half-open: `start_time` is included, `end_time` is not,
/// so a session ending at 10:00 and one starting at 10:00 do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl WeeklySlot {
    /// Create a validated slot. Zero-duration and inverted intervals are
    /// malformed regardless of what they might conflict with.
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> TimetableResult<Self> {
        if start_time >= end_time {
            return Err(TimetableError::Validation(format!(
                "Start time {} must be before end time {}",
                start_time, end_time
            )));
        }
        Ok(Self {
            day_of_week,
            start_time,
            end_time,
        })
    }

    /// Half-open overlap check. Symmetric; slots on different days never
    /// overlap, and touching endpoints do not count.
    pub fn overlaps(&self, other: &WeeklySlot) -> bool {
        self.day_of_week == other.day_of_week
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}
