//! Event search and list filtering.
//!
//! Free-text search matches case-insensitively over title, location, and
//! description. Filters combine through [`EventFilter`]. Like the
//! membership views, everything here is pure and borrow-only, and input
//! order is preserved.

use chrono::NaiveDate;

use crate::event::{Color, Event};

/// Events matching a free-text term in title, location, or description.
///
/// An empty or whitespace-only term matches everything.
pub fn search_events<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return events.iter().collect();
    }

    events.iter().filter(|e| matches_term(e, &term)).collect()
}

fn matches_term(event: &Event, lower_term: &str) -> bool {
    event.title.to_lowercase().contains(lower_term)
        || event.location.to_lowercase().contains(lower_term)
        || event
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(lower_term))
}

/// A combination of list filters. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Free-text term for [`search_events`].
    pub term: Option<String>,
    /// Keep only events with this palette color.
    pub color: Option<Color>,
    /// Keep only events overlapping `from..=to` (either side unbounded
    /// when absent). Overlap, not containment: an event counts when any
    /// of its days falls inside the range.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl EventFilter {
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut results = search_events(events, self.term.as_deref().unwrap_or(""));

        if let Some(color) = self.color {
            results.retain(|e| e.color == color);
        }
        if let Some(from) = self.from {
            results.retain(|e| e.end_date >= from);
        }
        if let Some(to) = self.to {
            results.retain(|e| e.start_date <= to);
        }

        results
    }
}
