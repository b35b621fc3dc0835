use anyhow::Result;
use chrono::NaiveDate;
use evcal_core::views::month_grid;
use evcal_core::Event;

use crate::render;

pub fn run(events: &[Event], anchor: NaiveDate, today: NaiveDate) -> Result<()> {
    let grid = month_grid(events, anchor);
    println!("{}", render::render_month(&grid, anchor, today));

    // List the month's events under the grid, each once even when they
    // span several cells.
    let mut seen: Vec<&str> = Vec::new();
    let mut lines = Vec::new();
    for cell in grid.iter().filter(|c| c.in_month) {
        for event in &cell.events {
            if !seen.contains(&event.id.as_str()) {
                seen.push(&event.id);
                lines.push(format!("  {}", render::render_event_line(event)));
            }
        }
    }

    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("{line}");
        }
    }

    Ok(())
}
