//! ICS document generation.
//!
//! Emits an RFC 5545-subset iCalendar document for a snapshot of all-day
//! events. The one rule that matters most here: iCalendar treats `DTEND`
//! of an all-day event as exclusive, so the serialized end is always the
//! inclusive `end_date` plus one calendar day.

use chrono::{Duration, Utc};

use crate::date::format_ics_date;
use crate::event::Event;

/// UID domain suffix. UIDs are derived from the event id alone, so
/// re-exporting an event keeps its identity across imports. Importers will
/// not detect content edits through the UID; that is a known limitation of
/// identity-only UIDs, not something to work around here.
const UID_DOMAIN: &str = "evcal";

const PRODID: &str = "-//evcal//EN";

/// Generate a complete iCalendar document for `events`.
///
/// An empty snapshot still produces a valid header+footer document.
pub fn generate_ics(events: &[Event], calendar_name: &str) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(calendar_name)),
        "X-WR-TIMEZONE:UTC".to_string(),
        "BEGIN:VTIMEZONE".to_string(),
        "TZID:UTC".to_string(),
        "BEGIN:STANDARD".to_string(),
        "DTSTART:19700101T000000Z".to_string(),
        "TZOFFSETFROM:+0000".to_string(),
        "TZOFFSETTO:+0000".to_string(),
        "END:STANDARD".to_string(),
        "END:VTIMEZONE".to_string(),
    ];

    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    for event in events {
        push_vevent(&mut lines, event, &dtstamp);
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

fn push_vevent(lines: &mut Vec<String>, event: &Event, dtstamp: &str) {
    // Exclusive end: one calendar day past the inclusive end_date.
    let dtend = event.end_date + Duration::days(1);

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}@{}", event.id, UID_DOMAIN));
    lines.push(format!("DTSTAMP:{dtstamp}"));
    lines.push(format!(
        "DTSTART;VALUE=DATE:{}",
        format_ics_date(event.start_date)
    ));
    lines.push(format!("DTEND;VALUE=DATE:{}", format_ics_date(dtend)));
    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
    if !event.location.is_empty() {
        lines.push(format!("LOCATION:{}", escape_text(&event.location)));
    }
    if let Some(description) = event.description.as_deref() {
        if !description.is_empty() {
            lines.push(format!("DESCRIPTION:{}", escape_text(description)));
        }
    }
    lines.push(format!("CATEGORIES:{}", event.color));
    lines.push("STATUS:CONFIRMED".to_string());
    lines.push("SEQUENCE:0".to_string());
    lines.push("END:VEVENT".to_string());
}

/// Escape a text value per RFC 5545.
///
/// Backslash must be escaped before the other substitutions so the
/// backslashes they introduce are not escaped again. All newline flavors
/// collapse to the literal two-character `\n` sequence.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\n")
}
