use anyhow::Result;
use chrono::NaiveDate;
use evcal_core::views::forward_agenda;
use evcal_core::Event;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(events: &[Event], from: NaiveDate, today: NaiveDate) -> Result<()> {
    let agenda = forward_agenda(events, from);

    if agenda.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    let mut first = true;
    for (date, group) in &agenda {
        if !first {
            println!();
        }
        first = false;

        println!(
            "{} {}",
            render::render_date_heading(*date, today),
            render::days_away_badge(*date, today)
        );
        for event in group {
            println!("  {}", render::render_event_line(event));
        }
    }

    Ok(())
}
