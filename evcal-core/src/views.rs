//! Date-range membership engine.
//!
//! Pure functions mapping an event snapshot plus an anchor date to the
//! shapes the calendar views render: day membership, the month grid, the
//! week row, and the forward-looking agenda. Nothing here mutates or
//! validates input; malformed ranges simply produce empty membership.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::date::{days_in_month, month_start, week_start};
use crate::event::Event;

/// One cell of a month grid or week row.
#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    /// False for the leading/trailing padding days of a month grid.
    pub in_month: bool,
    /// Events active on this day. Empty for padding cells, which never
    /// compute membership.
    pub events: Vec<&'a Event>,
}

/// Every event active on `day`, ordered ascending by start date.
///
/// The sort is stable: events sharing a start date keep their snapshot
/// order.
pub fn events_on_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    let mut active: Vec<&Event> = events.iter().filter(|e| e.is_active_on(day)).collect();
    active.sort_by_key(|e| e.start_date);
    active
}

/// The full month grid for the month containing `anchor`.
///
/// Cells run in Monday-start weeks and cover the whole month, padded with
/// the real dates of the adjacent months so the length is always a
/// multiple of 7.
pub fn month_grid<'a>(events: &'a [Event], anchor: NaiveDate) -> Vec<DayCell<'a>> {
    let first = month_start(anchor);
    let day_count = days_in_month(anchor) as i64;
    let grid_start = week_start(first);

    let leading = (first - grid_start).num_days();
    let trailing = (7 - (leading + day_count) % 7) % 7;
    let total = leading + day_count + trailing;

    (0..total)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            let in_month = offset >= leading && offset < leading + day_count;
            DayCell {
                date,
                in_month,
                events: if in_month {
                    events_on_day(events, date)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

/// The seven cells, Monday through Sunday, of the week containing `anchor`.
pub fn week_row<'a>(events: &'a [Event], anchor: NaiveDate) -> Vec<DayCell<'a>> {
    let monday = week_start(anchor);
    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            DayCell {
                date,
                in_month: true,
                events: events_on_day(events, date),
            }
        })
        .collect()
}

/// Upcoming events grouped by start date.
///
/// Keeps only events starting on or after `from`, grouped under their
/// start date with keys ascending. Within a group, snapshot order is
/// preserved.
pub fn forward_agenda<'a>(
    events: &'a [Event],
    from: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
    let mut sorted: Vec<&Event> = events.iter().filter(|e| e.start_date >= from).collect();
    sorted.sort_by_key(|e| e.start_date);

    let mut groups: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in sorted {
        groups.entry(event.start_date).or_default().push(event);
    }
    groups
}

/// The next `limit` events that have not yet ended as of `today`.
///
/// Unlike [`forward_agenda`] this keeps events already in progress
/// (started before `today` but still running).
pub fn upcoming<'a>(events: &'a [Event], today: NaiveDate, limit: usize) -> Vec<&'a Event> {
    let mut running: Vec<&Event> = events.iter().filter(|e| e.end_date >= today).collect();
    running.sort_by_key(|e| e.start_date);
    running.truncate(limit);
    running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Color;
    use chrono::Datelike;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            start_date: date(start),
            end_date: date(end),
            location: String::new(),
            description: None,
            color: Color::Blue,
            ticket_url: None,
        }
    }

    #[test]
    fn events_on_day_matches_inclusive_containment() {
        let events = vec![
            event("a", "2025-06-01", "2025-06-03"),
            event("b", "2025-06-03", "2025-06-03"),
            event("c", "2025-06-04", "2025-06-05"),
        ];

        let ids = |day: &str| -> Vec<&str> {
            events_on_day(&events, date(day))
                .iter()
                .map(|e| e.id.as_str())
                .collect()
        };

        assert_eq!(ids("2025-05-31"), Vec::<&str>::new());
        assert_eq!(ids("2025-06-01"), vec!["a"]);
        assert_eq!(ids("2025-06-03"), vec!["a", "b"]);
        assert_eq!(ids("2025-06-04"), vec!["c"]);
    }

    #[test]
    fn events_on_day_sorts_by_start_date_stably() {
        // All three are active on the 5th; "late" starts last, and the two
        // sharing a start date keep their snapshot order.
        let events = vec![
            event("second", "2025-06-03", "2025-06-10"),
            event("late", "2025-06-05", "2025-06-05"),
            event("first", "2025-06-03", "2025-06-08"),
            event("early", "2025-06-01", "2025-06-07"),
        ];

        let ids: Vec<&str> = events_on_day(&events, date("2025-06-05"))
            .iter()
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(ids, vec!["early", "second", "first", "late"]);
    }

    #[test]
    fn multi_day_event_appears_in_every_intersected_cell() {
        let events = vec![event("span", "2025-06-10", "2025-06-12")];
        let grid = month_grid(&events, date("2025-06-01"));

        let days_with_event: Vec<NaiveDate> = grid
            .iter()
            .filter(|c| !c.events.is_empty())
            .map(|c| c.date)
            .collect();

        assert_eq!(
            days_with_event,
            vec![date("2025-06-10"), date("2025-06-11"), date("2025-06-12")]
        );
    }

    #[test]
    fn month_grid_is_full_weeks_starting_monday() {
        for anchor in ["2025-06-15", "2025-02-01", "2024-02-29", "2025-12-31"] {
            let grid = month_grid(&[], date(anchor));
            assert_eq!(grid.len() % 7, 0, "anchor {anchor}");
            assert!(grid.len() >= 28, "anchor {anchor}");
            assert_eq!(
                grid[0].date.weekday(),
                chrono::Weekday::Mon,
                "anchor {anchor}"
            );
            // Consecutive dates with no gaps.
            for pair in grid.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
            // Every in-month day of the anchor month is present exactly once.
            let in_month = grid.iter().filter(|c| c.in_month).count() as u32;
            assert_eq!(in_month, days_in_month(date(anchor)), "anchor {anchor}");
        }
    }

    #[test]
    fn month_grid_padding_cells_carry_adjacent_month_dates() {
        // June 2025 starts on a Sunday, so the grid leads with Mon May 26.
        let grid = month_grid(&[], date("2025-06-15"));
        assert_eq!(grid[0].date, date("2025-05-26"));
        assert!(!grid[0].in_month);
        assert!(grid[0].events.is_empty());
        assert_eq!(grid[6].date, date("2025-06-01"));
        assert!(grid[6].in_month);
    }

    #[test]
    fn month_grid_padding_never_computes_membership() {
        // This event is active on the padding day May 26 but the cell
        // stays empty.
        let events = vec![event("pad", "2025-05-26", "2025-05-26")];
        let grid = month_grid(&events, date("2025-06-15"));
        assert_eq!(grid[0].date, date("2025-05-26"));
        assert!(grid[0].events.is_empty());
    }

    #[test]
    fn week_row_is_exactly_monday_through_sunday() {
        let events = vec![event("a", "2025-06-04", "2025-06-04")];
        let row = week_row(&events, date("2025-06-05"));

        assert_eq!(row.len(), 7);
        assert_eq!(row[0].date, date("2025-06-02"));
        assert_eq!(row[0].date.weekday(), chrono::Weekday::Mon);
        assert_eq!(row[6].date, date("2025-06-08"));
        // Wednesday holds the event.
        assert_eq!(row[2].events.len(), 1);
        assert!(row.iter().all(|c| c.in_month));
    }

    #[test]
    fn forward_agenda_excludes_earlier_starts_and_sorts_keys() {
        let events = vec![
            event("past", "2024-12-31", "2025-01-05"),
            event("b", "2025-02-01", "2025-02-01"),
            event("a", "2025-01-01", "2025-01-01"),
            event("a2", "2025-01-01", "2025-01-02"),
        ];

        let agenda = forward_agenda(&events, date("2025-01-01"));

        // "past" started before the cutoff, even though it is still running.
        let keys: Vec<NaiveDate> = agenda.keys().copied().collect();
        assert_eq!(keys, vec![date("2025-01-01"), date("2025-02-01")]);

        let jan1: Vec<&str> = agenda[&date("2025-01-01")]
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(jan1, vec!["a", "a2"]);
    }

    #[test]
    fn upcoming_keeps_in_progress_events_and_truncates() {
        let events = vec![
            event("done", "2025-05-01", "2025-05-02"),
            event("running", "2025-05-30", "2025-06-02"),
            event("next", "2025-06-10", "2025-06-10"),
            event("later", "2025-07-01", "2025-07-01"),
        ];

        let ids: Vec<&str> = upcoming(&events, date("2025-06-01"), 2)
            .iter()
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(ids, vec!["running", "next"]);
    }

    #[test]
    fn empty_input_yields_empty_results() {
        assert!(events_on_day(&[], date("2025-06-01")).is_empty());
        assert!(forward_agenda(&[], date("2025-06-01")).is_empty());
        assert!(upcoming(&[], date("2025-06-01"), 5).is_empty());
    }
}
