use anyhow::Result;
use chrono::NaiveDate;
use evcal_core::views::week_row;
use evcal_core::Event;

use crate::render;

pub fn run(events: &[Event], anchor: NaiveDate, today: NaiveDate) -> Result<()> {
    let row = week_row(events, anchor);
    println!("{}", render::render_week(&row, today));
    Ok(())
}
