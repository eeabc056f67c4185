//! Calendar export for external feed consumers.
//!
//! Each active entry becomes one event anchored at its next concrete
//! occurrence plus a weekly RRULE, which a calendar client can expand
//! indefinitely. The export is computed against an explicit reference
//! instant so repeated exports for the same instant are identical.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::occurrence;
use crate::models::TimetableEntry;

/// iCalendar UTC timestamp form, e.g. `20240101T090000Z`.
const ICAL_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A single exportable event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub dtstart: String,
    pub dtend: String,
    pub rrule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Calendar export payload: one event per active entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarExport {
    /// Always `"ical"`.
    pub format: String,
    pub events: Vec<CalendarEvent>,
}

/// Build the export for a set of entries. Inactive entries are skipped;
/// callers normally pass the already-filtered result of a store listing.
pub fn export_entries(entries: &[TimetableEntry], reference: DateTime<Utc>) -> CalendarExport {
    let events = entries
        .iter()
        .filter(|entry| entry.is_active)
        .map(|entry| event_for_entry(entry, reference))
        .collect();

    CalendarExport {
        format: "ical".to_string(),
        events,
    }
}

fn event_for_entry(entry: &TimetableEntry, reference: DateTime<Utc>) -> CalendarEvent {
    let occurrence = occurrence::next_occurrence(&entry.slot, reference);

    let summary = entry
        .subject
        .clone()
        .unwrap_or_else(|| format!("Class session (batch {})", entry.batch_id));

    let description = entry
        .teacher_id
        .map(|teacher| format!("Batch {}, teacher {}", entry.batch_id, teacher))
        .or_else(|| Some(format!("Batch {}", entry.batch_id)));

    CalendarEvent {
        summary,
        dtstart: occurrence.starts_at.format(ICAL_STAMP_FORMAT).to_string(),
        dtend: occurrence.ends_at.format(ICAL_STAMP_FORMAT).to_string(),
        rrule: occurrence::recurrence_rule(&entry.slot),
        location: entry.room.clone(),
        description,
    }
}

/// Render the export as a VCALENDAR document for `.ics` feed consumers.
pub fn render_ics(export: &CalendarExport) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//timetable-engine//EN".to_string(),
    ];

    for (index, event) in export.events.iter().enumerate() {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}-{}@timetable-engine", event.dtstart, index));
        lines.push(format!("DTSTART:{}", event.dtstart));
        lines.push(format!("DTEND:{}", event.dtend));
        lines.push(format!("RRULE:{}", event.rrule));
        lines.push(format!("SUMMARY:{}", escape_ics_text(&event.summary)));
        if let Some(location) = &event.location {
            lines.push(format!("LOCATION:{}", escape_ics_text(location)));
        }
        if let Some(description) = &event.description {
            lines.push(format!("DESCRIPTION:{}", escape_ics_text(description)));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    // RFC 5545 mandates CRLF line endings.
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// Escape text per RFC 5545 §3.3.11 (backslash, comma, semicolon, newline).
fn escape_ics_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BatchId, EntryId, TeacherId};
    use crate::models::{DayOfWeek, EntryDraft, WeeklySlot};
    use chrono::TimeZone;

    fn entry(id: i64, subject: Option<&str>, room: Option<&str>) -> TimetableEntry {
        let slot = WeeklySlot::new(
            DayOfWeek::Monday,
            "09:00".parse().unwrap(),
            "10:00".parse().unwrap(),
        )
        .unwrap();
        EntryDraft::new(
            BatchId::new(7),
            Some(TeacherId::new(3)),
            slot,
            room.map(str::to_string),
            subject.map(str::to_string),
        )
        .into_entry(EntryId::new(id))
    }

    fn reference() -> DateTime<Utc> {
        // 2024-01-01 00:00 UTC, a Monday.
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_export_shape() {
        let export = export_entries(&[entry(1, Some("Algebra"), Some("Room 2"))], reference());
        assert_eq!(export.format, "ical");
        assert_eq!(export.events.len(), 1);

        let event = &export.events[0];
        assert_eq!(event.summary, "Algebra");
        assert_eq!(event.dtstart, "20240101T090000Z");
        assert_eq!(event.dtend, "20240101T100000Z");
        assert_eq!(event.rrule, "FREQ=WEEKLY;BYDAY=MO");
        assert_eq!(event.location.as_deref(), Some("Room 2"));
    }

    #[test]
    fn test_export_skips_inactive() {
        let mut inactive = entry(1, None, None);
        inactive.is_active = false;
        let export = export_entries(&[inactive, entry(2, None, None)], reference());
        assert_eq!(export.events.len(), 1);
    }

    #[test]
    fn test_summary_falls_back_to_batch() {
        let export = export_entries(&[entry(1, None, None)], reference());
        assert_eq!(export.events[0].summary, "Class session (batch 7)");
    }

    #[test]
    fn test_render_ics_document() {
        let export = export_entries(&[entry(1, Some("Algebra"), Some("Room 2"))], reference());
        let ics = render_ics(&export);

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("DTSTART:20240101T090000Z\r\n"));
        assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO\r\n"));
        assert!(ics.contains("SUMMARY:Algebra\r\n"));
        assert!(ics.contains("LOCATION:Room 2\r\n"));
    }

    #[test]
    fn test_ics_text_escaping() {
        assert_eq!(escape_ics_text("a,b;c\nd"), "a\\,b\\;c\\nd");
        assert_eq!(escape_ics_text("back\\slash"), "back\\\\slash");
    }
}
