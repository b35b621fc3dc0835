use anyhow::Result;
use chrono::NaiveDate;
use evcal_core::search::EventFilter;
use evcal_core::Event;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(events: &[Event], filter: EventFilter, today: NaiveDate) -> Result<()> {
    let results = filter.apply(events);

    if results.is_empty() {
        println!("{}", "No matching events".dimmed());
        return Ok(());
    }

    for event in results {
        println!(
            "{} {}",
            event.start_date.to_string().bold(),
            render::render_event_line(event)
        );
    }

    Ok(())
}
