//! Wire boundary between the external event store and the engine.
//!
//! Store rows arrive as loosely-shaped JSON. They are parsed into the
//! strict [`Event`] record here, and rejected here, so the pure view and
//! export functions only ever see well-formed input.

use serde::Deserialize;

use crate::date::parse_ymd;
use crate::error::{EvcalError, EvcalResult};
use crate::event::{Color, Event};

/// A raw event row as the store serves it.
///
/// Dates and color are plain strings; unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEvent {
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub ticket_url: Option<String>,
}

impl TryFrom<WireEvent> for Event {
    type Error = EvcalError;

    fn try_from(raw: WireEvent) -> EvcalResult<Event> {
        if raw.id.trim().is_empty() {
            return Err(EvcalError::MalformedRecord("empty id".to_string()));
        }
        if raw.title.trim().is_empty() {
            return Err(EvcalError::MalformedRecord(format!(
                "event '{}' has an empty title",
                raw.id
            )));
        }

        let start_date = parse_ymd(&raw.start_date)?;
        let end_date = parse_ymd(&raw.end_date)?;
        if start_date > end_date {
            return Err(EvcalError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }

        let color = match raw.color.as_deref() {
            None | Some("") => Color::default(),
            Some(token) => token
                .parse()
                .map_err(|e: String| EvcalError::MalformedRecord(e))?,
        };

        let description = raw.description.filter(|d| !d.is_empty());
        let ticket_url = raw.ticket_url.filter(|u| !u.is_empty());

        Ok(Event {
            id: raw.id,
            title: raw.title,
            start_date,
            end_date,
            location: raw.location,
            description,
            color,
            ticket_url,
        })
    }
}

/// Parse a JSON array of store rows into strict events.
///
/// Fails on the first malformed record rather than silently dropping it.
pub fn parse_records(json: &str) -> EvcalResult<Vec<Event>> {
    let raw: Vec<WireEvent> =
        serde_json::from_str(json).map_err(|e| EvcalError::Serialization(e.to_string()))?;
    raw.into_iter().map(Event::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> WireEvent {
        WireEvent {
            id: "ev-1".to_string(),
            title: "Release party".to_string(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-03".to_string(),
            location: "Berlin".to_string(),
            description: Some("Doors at 8".to_string()),
            color: Some("purple".to_string()),
            ticket_url: None,
        }
    }

    #[test]
    fn valid_row_converts_with_all_fields() {
        let event = Event::try_from(raw()).unwrap();
        assert_eq!(event.id, "ev-1");
        assert_eq!(event.start_date.to_string(), "2025-06-01");
        assert_eq!(event.end_date.to_string(), "2025-06-03");
        assert_eq!(event.color, Color::Purple);
        assert_eq!(event.description.as_deref(), Some("Doors at 8"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut row = raw();
        row.start_date = "06/01/2025".to_string();
        assert!(matches!(
            Event::try_from(row),
            Err(EvcalError::MalformedRecord(_))
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut row = raw();
        row.start_date = "2025-06-05".to_string();
        assert!(matches!(
            Event::try_from(row),
            Err(EvcalError::InvalidRange { .. })
        ));
    }

    #[test]
    fn unknown_color_is_rejected_but_missing_color_defaults() {
        let mut row = raw();
        row.color = Some("magenta".to_string());
        assert!(matches!(
            Event::try_from(row),
            Err(EvcalError::MalformedRecord(_))
        ));

        let mut row = raw();
        row.color = None;
        assert_eq!(Event::try_from(row).unwrap().color, Color::Blue);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut row = raw();
        row.title = "  ".to_string();
        assert!(matches!(
            Event::try_from(row),
            Err(EvcalError::MalformedRecord(_))
        ));
    }

    #[test]
    fn parse_records_reads_a_snapshot_and_ignores_extra_fields() {
        let json = r#"[
            {
                "id": "a",
                "title": "One",
                "start_date": "2025-06-01",
                "end_date": "2025-06-01",
                "user_id": "ignored",
                "created_at": "2025-05-01T10:00:00Z"
            },
            {
                "id": "b",
                "title": "Two",
                "start_date": "2025-06-02",
                "end_date": "2025-06-04",
                "color": "red"
            }
        ]"#;

        let events = parse_records(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].color, Color::Red);
    }

    #[test]
    fn parse_records_fails_on_first_bad_row() {
        let json = r#"[
            {"id": "a", "title": "One", "start_date": "2025-06-02", "end_date": "2025-06-01"}
        ]"#;
        assert!(matches!(
            parse_records(json),
            Err(EvcalError::InvalidRange { .. })
        ));
    }
}
