use anyhow::Result;
use chrono::NaiveDate;
use evcal_core::views::events_on_day;
use evcal_core::Event;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(events: &[Event], date: NaiveDate, today: NaiveDate) -> Result<()> {
    println!("{}", render::render_date_heading(date, today));

    let active = events_on_day(events, date);
    if active.is_empty() {
        println!("  {}", "no events".dimmed());
        return Ok(());
    }

    for event in active {
        println!("  {}", render::render_event_line(event));
        if let Some(ref description) = event.description {
            println!("    {}", description.dimmed());
        }
    }

    Ok(())
}
