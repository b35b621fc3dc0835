//! Core engines for the evcal shared event calendar.
//!
//! This crate holds the logic the UI surfaces build on:
//! - `event`: the all-day `Event` record and its display palette
//! - `wire`: the parsing boundary from loose store rows to strict events
//! - `views`: pure date-range membership (day, month grid, week, agenda)
//! - `search`: free-text search and list filters
//! - `ics`: iCalendar export and import with exclusive-DTEND handling
//! - `date`: the shared `YYYY-MM-DD` calendar-date utilities
//!
//! Everything here is a pure transformation of caller-supplied snapshots;
//! persistence, auth, and realtime sync live with the callers.

pub mod date;
pub mod error;
pub mod event;
pub mod ics;
pub mod search;
pub mod views;
pub mod wire;

pub use error::{EvcalError, EvcalResult};
pub use event::{Color, Event};
