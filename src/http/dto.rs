//! Data Transfer Objects for the HTTP API.
//!
//! The domain types already derive Serialize/Deserialize with the
//! canonical wire forms (`"HH:MM"` times, upper-case day names), so most
//! responses reuse them directly; the DTOs here cover request bodies and
//! the wrapper shapes the frontend expects.

use serde::{Deserialize, Serialize};

// Re-export existing types that are already serializable
pub use crate::api::{
    CalendarEvent, CalendarExport, Conflict, ConflictReport, ConflictScope, DayOfWeek,
    EntryChanges, EntrySummary, TimeOfDay, TimetableEntry,
};

use crate::api::{BatchId, TeacherId};
use crate::error::TimetableResult;
use crate::models::{EntryDraft, WeeklySlot};

/// Request body for creating a new timetable entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub batch_id: i64,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl CreateEntryRequest {
    /// Validate the interval and build the candidate draft.
    pub fn into_draft(self) -> TimetableResult<EntryDraft> {
        let slot = WeeklySlot::new(self.day_of_week, self.start_time, self.end_time)?;
        Ok(EntryDraft::new(
            BatchId::new(self.batch_id),
            self.teacher_id.map(TeacherId::new),
            slot,
            self.room,
            self.subject,
        ))
    }
}

/// Request body for the advisory conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictCheckRequest {
    pub batch_id: i64,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl ConflictCheckRequest {
    pub fn into_draft(self) -> TimetableResult<EntryDraft> {
        let slot = WeeklySlot::new(self.day_of_week, self.start_time, self.end_time)?;
        Ok(EntryDraft::new(
            BatchId::new(self.batch_id),
            self.teacher_id.map(TeacherId::new),
            slot,
            None,
            None,
        ))
    }
}

/// Response for the advisory conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    pub conflicts: Vec<Conflict>,
}

impl From<ConflictReport> for ConflictCheckResponse {
    fn from(report: ConflictReport) -> Self {
        Self {
            has_conflict: report.has_conflict(),
            conflicts: report.conflicts,
        }
    }
}

/// Entry list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryListResponse {
    pub entries: Vec<TimetableEntry>,
    pub total: usize,
}

impl From<Vec<TimetableEntry>> for EntryListResponse {
    fn from(entries: Vec<TimetableEntry>) -> Self {
        let total = entries.len();
        Self { entries, total }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}
