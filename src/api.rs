//! Public API surface for the scheduling engine.
//!
//! This file consolidates the identifier newtypes and re-exports the core
//! domain types so callers can `use timetable_engine::api::*` without
//! reaching into individual modules.

pub use crate::models::day::DayOfWeek;
pub use crate::models::entry::{EntryChanges, EntryDraft, TimetableEntry};
pub use crate::models::slot::WeeklySlot;
pub use crate::models::time::TimeOfDay;
pub use crate::services::aggregator::EntrySummary;
pub use crate::services::calendar::{CalendarEvent, CalendarExport};
pub use crate::services::conflicts::{Conflict, ConflictReport, ConflictScope};
pub use crate::services::occurrence::Occurrence;

use serde::{Deserialize, Serialize};

/// Timetable entry identifier (store primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub i64);

/// Batch identifier, owned by the Roster service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BatchId(pub i64);

/// Teacher identifier, owned by the Roster service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeacherId(pub i64);

/// Level identifier, owned by the Roster service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId(pub i64);

impl EntryId {
    pub fn new(value: i64) -> Self {
        EntryId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl BatchId {
    pub fn new(value: i64) -> Self {
        BatchId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TeacherId {
    pub fn new(value: i64) -> Self {
        TeacherId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl LevelId {
    pub fn new(value: i64) -> Self {
        LevelId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntryId> for i64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}
