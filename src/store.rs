//! The local JSON event store.
//!
//! The store is a single JSON array of event rows, the snapshot shape the
//! shared backend serves. Every row passes through the evcal-core wire
//! boundary on load, so everything past this point is a strict `Event`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use evcal_core::wire::parse_records;
use evcal_core::Event;

pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Load the snapshot at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let events = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            parse_records(&content)
                .with_context(|| format!("Invalid event store at {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(EventStore {
            path: path.to_path_buf(),
            events,
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Merge imported events into the store: rows with a known id replace
    /// the existing event, new ids are appended. Returns (added, updated).
    pub fn merge(&mut self, incoming: Vec<Event>) -> (usize, usize) {
        let mut added = 0;
        let mut updated = 0;
        for event in incoming {
            match self.events.iter_mut().find(|e| e.id == event.id) {
                Some(existing) => {
                    *existing = event;
                    updated += 1;
                }
                None => {
                    self.events.push(event);
                    added += 1;
                }
            }
        }
        (added, updated)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
