use std::path::Path;

use anyhow::Result;
use evcal_core::ics::generate_ics;
use evcal_core::Event;
use owo_colors::OwoColorize;

/// Run the export engine and hand the document to its destination.
pub fn run(events: &[Event], calendar_name: &str, output: &Path, to_stdout: bool) -> Result<()> {
    let ics = generate_ics(events, calendar_name);

    if to_stdout {
        print!("{ics}");
        return Ok(());
    }

    std::fs::write(output, &ics)?;
    println!(
        "{} {} event(s) to {}",
        "Exported".green(),
        events.len(),
        output.display()
    );
    Ok(())
}
