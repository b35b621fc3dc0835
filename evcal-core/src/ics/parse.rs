//! ICS document parsing using the icalendar crate's parser.
//!
//! This is the inverse of [`super::generate`]: it knows that `DTEND` of an
//! all-day VEVENT is exclusive and hands back the inclusive `end_date` the
//! rest of the crate works with.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use icalendar::parser::{read_calendar, unfold, Component};

use crate::error::{EvcalError, EvcalResult};
use crate::event::{Color, Event};

/// A calendar document interpreted back into events.
#[derive(Debug, Clone)]
pub struct ParsedCalendar {
    /// `X-WR-CALNAME`, if present.
    pub name: Option<String>,
    pub events: Vec<Event>,
}

/// Parse ICS content into events.
///
/// VEVENTs that cannot be interpreted (missing UID or DTSTART) are skipped;
/// only an unreadable document is an error.
pub fn parse_calendar(content: &str) -> EvcalResult<ParsedCalendar> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| EvcalError::IcsParse(e.to_string()))?;

    let mut vevents = Vec::new();
    collect_vevents(&calendar.components, &mut vevents);

    let events = vevents.iter().filter_map(|c| parse_event(c)).collect();

    let name = unfolded
        .lines()
        .find_map(|line| line.strip_prefix("X-WR-CALNAME:"))
        .map(|raw| unescape_text(raw.trim_end()));

    Ok(ParsedCalendar { name, events })
}

/// Collect VEVENT components at any nesting depth.
fn collect_vevents<'a, 'b>(components: &'a [Component<'b>], out: &mut Vec<&'a Component<'b>>) {
    for component in components {
        if component.name == "VEVENT" {
            out.push(component);
        }
        collect_vevents(&component.components, out);
    }
}

/// Interpret a single VEVENT.
fn parse_event(vevent: &Component) -> Option<Event> {
    let uid = vevent.find_prop("UID")?.val.to_string();
    // UIDs we generated carry the evcal domain suffix; strip it to recover
    // the store id. Foreign UIDs are kept whole.
    let id = uid.strip_suffix("@evcal").unwrap_or(&uid).to_string();

    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape_text(p.val.as_ref()))
        .unwrap_or_else(|| "(No title)".to_string());

    let (start_date, _) = prop_date(vevent, "DTSTART")?;

    let end_date = match prop_date(vevent, "DTEND") {
        // All-day DTEND is exclusive; bring it back to the inclusive form.
        Some((date, true)) => date - Duration::days(1),
        // Timed DTEND is inclusive enough already: take its calendar day.
        Some((date, false)) => date,
        None => start_date,
    };
    // Some emitters write DTEND equal to DTSTART for single-day events.
    let end_date = end_date.max(start_date);

    let location = vevent
        .find_prop("LOCATION")
        .map(|p| unescape_text(p.val.as_ref()))
        .unwrap_or_default();

    let description = vevent
        .find_prop("DESCRIPTION")
        .map(|p| unescape_text(p.val.as_ref()))
        .filter(|d| !d.is_empty());

    // Foreign calendars use arbitrary CATEGORIES; anything outside the
    // palette falls back to the default color.
    let color = vevent
        .find_prop("CATEGORIES")
        .and_then(|p| p.val.as_ref().parse().ok())
        .unwrap_or_default();

    Some(Event {
        id,
        title,
        start_date,
        end_date,
        location,
        description,
        color,
        ticket_url: None,
    })
}

/// Read a date property, returning the calendar date and whether it was in
/// the all-day `VALUE=DATE` form.
fn prop_date(vevent: &Component, name: &str) -> Option<(NaiveDate, bool)> {
    let val = vevent.find_prop(name)?.val.to_string();

    if let Ok(date) = NaiveDate::parse_from_str(&val, "%Y%m%d") {
        return Some((date, true));
    }
    for format in ["%Y%m%dT%H%M%SZ", "%Y%m%dT%H%M%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&val, format) {
            return Some((dt.date(), false));
        }
    }
    None
}

/// Undo RFC 5545 text escaping.
fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}
