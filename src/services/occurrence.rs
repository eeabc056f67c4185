//! Projection of recurring weekly slots onto concrete calendar dates.
//!
//! Everything here is pure: for a fixed `(slot, reference)` pair the result
//! is always the same, which is what makes calendar exports reproducible
//! and testable. The engine runs on a single organizational calendar, so
//! all projected timestamps are UTC.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DayOfWeek, WeeklySlot};

/// A single concrete occurrence of a recurring slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Compute the next occurrence of `slot` on or after `reference`.
///
/// The result's start is never in the past relative to `reference`: when
/// the reference day already matches but the slot's start has gone by, the
/// projection advances a full week. A start exactly at `reference` counts
/// as not yet passed.
pub fn next_occurrence(slot: &WeeklySlot, reference: DateTime<Utc>) -> Occurrence {
    let reference_day = DayOfWeek::from(reference.weekday());
    let days_ahead = (i64::from(slot.day_of_week.index()) - i64::from(reference_day.index()))
        .rem_euclid(7);

    let mut date = reference.date_naive() + Duration::days(days_ahead);
    let mut starts_at = date.and_time(slot.start_time.to_naive_time()).and_utc();
    if starts_at < reference {
        date = date + Duration::days(7);
        starts_at = date.and_time(slot.start_time.to_naive_time()).and_utc();
    }
    let ends_at = date.and_time(slot.end_time.to_naive_time()).and_utc();

    Occurrence { starts_at, ends_at }
}

/// iCalendar weekly recurrence descriptor for the slot's weekday.
pub fn recurrence_rule(slot: &WeeklySlot) -> String {
    format!("FREQ=WEEKLY;BYDAY={}", slot.day_of_week.byday_code())
}
