//! Timetable entry entity and its candidate/update forms.

use serde::{Deserialize, Serialize};

use super::slot::WeeklySlot;
use crate::api::{BatchId, EntryId, TeacherId};
use crate::error::TimetableResult;

/// A weekly-recurring class session.
///
/// Entries are never hard-deleted: "deletion" flips `is_active` to false so
/// past schedules stay available for audit and for levels/batches that
/// reference them. Only active entries participate in conflict detection
/// and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: EntryId,
    pub batch_id: BatchId,
    /// Absent means the session is unassigned/TBA. Unassigned entries never
    /// participate in teacher-scope conflict checks.
    pub teacher_id: Option<TeacherId>,
    #[serde(flatten)]
    pub slot: WeeklySlot,
    pub room: Option<String>,
    pub subject: Option<String>,
    pub is_active: bool,
}

/// A candidate entry: everything a [`TimetableEntry`] carries except the
/// store-assigned id and lifecycle flag. The slot is validated at
/// construction, so a draft is well-formed by the time it reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub batch_id: BatchId,
    pub teacher_id: Option<TeacherId>,
    #[serde(flatten)]
    pub slot: WeeklySlot,
    pub room: Option<String>,
    pub subject: Option<String>,
}

impl EntryDraft {
    pub fn new(
        batch_id: BatchId,
        teacher_id: Option<TeacherId>,
        slot: WeeklySlot,
        room: Option<String>,
        subject: Option<String>,
    ) -> Self {
        Self {
            batch_id,
            teacher_id,
            slot,
            room,
            subject,
        }
    }

    /// Materialize the draft into an active entry with a store-assigned id.
    pub fn into_entry(self, id: EntryId) -> TimetableEntry {
        TimetableEntry {
            id,
            batch_id: self.batch_id,
            teacher_id: self.teacher_id,
            slot: self.slot,
            room: self.room,
            subject: self.subject,
            is_active: true,
        }
    }
}

/// Partial update for an existing entry.
///
/// Outer `None` means "leave the field unchanged"; for the optional fields
/// (`teacher_id`, `room`, `subject`) an explicit inner `None` clears the
/// value. Serde preserves that distinction: a missing JSON field
/// deserializes to `None`, a JSON `null` to `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<BatchId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<Option<TeacherId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<super::day::DayOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<super::time::TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<super::time::TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Option<String>>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self == &EntryChanges::default()
    }

    /// Merge the changes over an existing entry, re-validating the merged
    /// interval as if it were a brand-new candidate.
    pub fn apply_to(&self, entry: &TimetableEntry) -> TimetableResult<EntryDraft> {
        let slot = WeeklySlot::new(
            self.day_of_week.unwrap_or(entry.slot.day_of_week),
            self.start_time.unwrap_or(entry.slot.start_time),
            self.end_time.unwrap_or(entry.slot.end_time),
        )?;

        Ok(EntryDraft {
            batch_id: self.batch_id.unwrap_or(entry.batch_id),
            teacher_id: self.teacher_id.clone().unwrap_or(entry.teacher_id),
            slot,
            room: self.room.clone().unwrap_or_else(|| entry.room.clone()),
            subject: self
                .subject
                .clone()
                .unwrap_or_else(|| entry.subject.clone()),
        })
    }
}
