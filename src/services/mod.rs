//! Business logic services: conflict detection, occurrence projection,
//! calendar export, dashboard aggregation, and the roster collaborator.
//!
//! Services are read-side or pure computations; the only mutating paths in
//! the engine live behind the repository's conflict-gated writes.

pub mod aggregator;
pub mod calendar;
pub mod conflicts;
pub mod occurrence;
pub mod roster;

pub use aggregator::{weekly_grouping, EntrySummary};
pub use calendar::{export_entries, render_ics, CalendarEvent, CalendarExport};
pub use conflicts::{detect, Conflict, ConflictReport, ConflictScope};
pub use occurrence::{next_occurrence, recurrence_rule, Occurrence};
pub use roster::{Roster, StaticRoster};
