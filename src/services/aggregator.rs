//! Read-side views over the timetable store for dashboard rendering.
//!
//! Aggregations are derived on every call and never cached: the store is
//! the sole source of truth and a grouping computed after a write must
//! reflect that write immediately.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{BatchId, EntryId, TeacherId};
use crate::db::repository::TimetableRepository;
use crate::error::TimetableResult;
use crate::models::{DayOfWeek, TimeOfDay, TimetableEntry};

/// Dashboard projection of an entry: what a weekly grid cell displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub id: EntryId,
    pub batch_id: BatchId,
    pub teacher_id: Option<TeacherId>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub room: Option<String>,
    pub subject: Option<String>,
}

impl From<&TimetableEntry> for EntrySummary {
    fn from(entry: &TimetableEntry) -> Self {
        Self {
            id: entry.id,
            batch_id: entry.batch_id,
            teacher_id: entry.teacher_id,
            start_time: entry.slot.start_time,
            end_time: entry.slot.end_time,
            room: entry.room.clone(),
            subject: entry.subject.clone(),
        }
    }
}

/// Group all active entries by day of week, each day sorted by start time.
///
/// Every day of the week is present in the result, empty or not, so grid
/// consumers render a stable seven-column layout.
pub async fn weekly_grouping(
    repo: &dyn TimetableRepository,
) -> TimetableResult<BTreeMap<DayOfWeek, Vec<EntrySummary>>> {
    let mut grouping: BTreeMap<DayOfWeek, Vec<EntrySummary>> = DayOfWeek::ALL
        .into_iter()
        .map(|day| (day, Vec::new()))
        .collect();

    // list_active is ordered by (day, start); pushing preserves that order
    // within each day.
    for entry in repo.list_active().await? {
        grouping
            .entry(entry.slot.day_of_week)
            .or_default()
            .push(EntrySummary::from(&entry));
    }

    Ok(grouping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::WeeklySlot;
    use crate::db::repositories::LocalRepository;
    use crate::models::EntryDraft;

    fn draft(batch: i64, day: DayOfWeek, start: &str, end: &str) -> EntryDraft {
        let slot = WeeklySlot::new(day, start.parse().unwrap(), end.parse().unwrap()).unwrap();
        EntryDraft::new(BatchId::new(batch), None, slot, None, None)
    }

    #[tokio::test]
    async fn test_weekly_grouping_has_all_days() {
        let repo = LocalRepository::new();
        let grouping = weekly_grouping(&repo).await.unwrap();
        assert_eq!(grouping.len(), 7);
        assert!(grouping.values().all(Vec::is_empty));
    }

    #[tokio::test]
    async fn test_weekly_grouping_sorted_by_start() {
        let repo = LocalRepository::new();
        repo.insert_if_no_conflict(draft(1, DayOfWeek::Monday, "11:00", "12:00"))
            .await
            .unwrap();
        repo.insert_if_no_conflict(draft(2, DayOfWeek::Monday, "09:00", "10:00"))
            .await
            .unwrap();
        repo.insert_if_no_conflict(draft(3, DayOfWeek::Tuesday, "08:00", "09:00"))
            .await
            .unwrap();

        let grouping = weekly_grouping(&repo).await.unwrap();
        let monday = &grouping[&DayOfWeek::Monday];
        assert_eq!(monday.len(), 2);
        assert!(monday[0].start_time < monday[1].start_time);
        assert_eq!(grouping[&DayOfWeek::Tuesday].len(), 1);
        assert!(grouping[&DayOfWeek::Sunday].is_empty());
    }

    #[tokio::test]
    async fn test_weekly_grouping_reflects_deactivation() {
        let repo = LocalRepository::new();
        let entry = repo
            .insert_if_no_conflict(draft(1, DayOfWeek::Friday, "09:00", "10:00"))
            .await
            .unwrap();

        repo.deactivate(entry.id).await.unwrap();
        let grouping = weekly_grouping(&repo).await.unwrap();
        assert!(grouping[&DayOfWeek::Friday].is_empty());
    }
}
