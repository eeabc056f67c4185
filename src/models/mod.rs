//! Core domain value types: days, times, weekly intervals, and entries.
//!
//! Everything in this module is a pure value type with no store or I/O
//! dependency. Validation happens at construction so the rest of the engine
//! only ever sees well-formed values.

pub mod day;
pub mod entry;
pub mod slot;
pub mod time;

pub use day::DayOfWeek;
pub use entry::{EntryChanges, EntryDraft, TimetableEntry};
pub use slot::WeeklySlot;
pub use time::TimeOfDay;
