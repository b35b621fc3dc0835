use anyhow::Result;
use chrono::NaiveDate;
use evcal_core::views::upcoming;
use evcal_core::Event;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(events: &[Event], today: NaiveDate, limit: usize) -> Result<()> {
    let next = upcoming(events, today, limit);

    if next.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    for event in next {
        println!(
            "{} {}",
            event.start_date.to_string().bold(),
            render::render_event_line(event)
        );
    }

    Ok(())
}
