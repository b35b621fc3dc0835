use std::path::Path;

use anyhow::{Context, Result};
use evcal_core::ics::parse_calendar;
use owo_colors::OwoColorize;

use crate::store::EventStore;

/// Import events from an ICS file into the store.
pub fn run(store: &mut EventStore, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;

    let parsed = parse_calendar(&content)?;
    if let Some(ref name) = parsed.name {
        println!("Importing from calendar '{name}'");
    }

    let (added, updated) = store.merge(parsed.events);
    store.save()?;

    println!(
        "{} {added} new event(s), updated {updated}",
        "Imported".green()
    );
    Ok(())
}
