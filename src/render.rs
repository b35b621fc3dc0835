//! Terminal rendering for the calendar views.
//!
//! Layout decisions live here; the shapes being rendered come straight
//! from `evcal_core::views`. Today-highlighting is plain `NaiveDate`
//! equality against the local calendar day.

use chrono::{Datelike, NaiveDate};
use evcal_core::views::DayCell;
use evcal_core::{Color, Event};
use owo_colors::OwoColorize;

/// Map a palette token to a terminal color.
pub fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Blue => text.blue().to_string(),
        Color::Red => text.red().to_string(),
        Color::Green => text.green().to_string(),
        Color::Yellow => text.yellow().to_string(),
        Color::Purple => text.magenta().to_string(),
        Color::Indigo => text.bright_blue().to_string(),
    }
}

/// Render a month grid as rows of Monday-start weeks.
pub fn render_month(grid: &[DayCell], anchor: NaiveDate, today: NaiveDate) -> String {
    let mut lines = Vec::new();

    lines.push(anchor.format("%B %Y").to_string().bold().to_string());
    lines.push(
        "Mon  Tue  Wed  Thu  Fri  Sat  Sun"
            .dimmed()
            .to_string(),
    );

    for week in grid.chunks(7) {
        let row: Vec<String> = week.iter().map(|cell| render_cell(cell, today)).collect();
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

/// One fixed-width grid cell: day number plus an event marker.
///
/// Padding is applied before any coloring so ANSI codes never skew the
/// column widths.
fn render_cell(cell: &DayCell, today: NaiveDate) -> String {
    let marker = match cell.events.first() {
        Some(event) => paint(event.color, "*"),
        None => " ".to_string(),
    };
    let day = format!("{:>3}", cell.date.day());

    let day = if cell.date == today {
        day.bold().underline().to_string()
    } else if !cell.in_month {
        day.dimmed().to_string()
    } else {
        day
    };

    format!("{day}{marker}")
}

/// Render a week row: one heading per day with its events underneath.
pub fn render_week(row: &[DayCell], today: NaiveDate) -> String {
    let mut lines = Vec::new();
    for cell in row {
        lines.push(render_date_heading(cell.date, today));
        if cell.events.is_empty() {
            lines.push(format!("  {}", "no events".dimmed()));
        } else {
            for event in &cell.events {
                lines.push(format!("  {}", render_event_line(event)));
            }
        }
    }
    lines.join("\n")
}

/// A date heading like "Mon 2025-06-02", bold when it is today.
pub fn render_date_heading(date: NaiveDate, today: NaiveDate) -> String {
    let label = date.format("%a %Y-%m-%d").to_string();
    if date == today {
        format!("{} {}", label.bold(), "(today)".bold())
    } else {
        label.bold().to_string()
    }
}

/// One event as a single line: colored bullet, title, span, metadata.
pub fn render_event_line(event: &Event) -> String {
    let bullet = paint(event.color, "●");
    let mut line = format!("{bullet} {}", event.title);

    if event.is_multi_day() {
        line.push_str(&format!(
            " {}",
            format!("({} → {})", event.start_date, event.end_date).dimmed()
        ));
    }
    if !event.location.is_empty() {
        line.push_str(&format!(" {}", format!("@ {}", event.location).dimmed()));
    }
    if let Some(ref url) = event.ticket_url {
        line.push_str(&format!(" {}", format!("tickets: {url}").dimmed()));
    }
    line
}

/// How far away a date is, as the agenda badge.
pub fn days_away_badge(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "today".green().to_string(),
        1 => "tomorrow".yellow().to_string(),
        -1 => "yesterday".dimmed().to_string(),
        n if n < 0 => format!("{} days ago", -n).dimmed().to_string(),
        n => format!("in {n} days").dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn days_away_badge_covers_past_and_future() {
        let today = date("2025-06-04");
        assert!(days_away_badge(today, today).contains("today"));
        assert!(days_away_badge(date("2025-06-05"), today).contains("tomorrow"));
        assert!(days_away_badge(date("2025-06-07"), today).contains("in 3 days"));
        assert!(days_away_badge(date("2025-06-03"), today).contains("yesterday"));
        assert!(days_away_badge(date("2025-06-01"), today).contains("3 days ago"));
        // Never a negative count in the label.
        assert!(!days_away_badge(date("2025-06-01"), today).contains('-'));
    }
}
