use anyhow::Result;
use evcal_core::wire::WireEvent;
use evcal_core::Event;
use owo_colors::OwoColorize;
use uuid::Uuid;

use crate::render;
use crate::store::EventStore;

pub struct AddArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub ticket_url: Option<String>,
}

/// Create a new event in the store.
///
/// The raw arguments go through the same wire boundary as store rows, so
/// malformed dates and inverted ranges are rejected here, before anything
/// is written.
pub fn run(store: &mut EventStore, args: AddArgs) -> Result<()> {
    let raw = WireEvent {
        id: Uuid::new_v4().to_string(),
        title: args.title,
        end_date: args.end.unwrap_or_else(|| args.start.clone()),
        start_date: args.start,
        location: args.location.unwrap_or_default(),
        description: args.description,
        color: args.color,
        ticket_url: args.ticket_url,
    };

    let event = Event::try_from(raw)?;
    println!("{} {}", "Added".green(), render::render_event_line(&event));

    store.add(event);
    store.save()?;
    Ok(())
}
