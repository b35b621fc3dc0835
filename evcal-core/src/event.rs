//! The calendar event record.
//!
//! Events are all-day: they carry an inclusive start and end calendar date
//! and no time-of-day. The store owns their lifecycle; this crate only
//! transforms snapshots it is handed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A shared calendar event.
///
/// `start_date <= end_date` is enforced at the wire boundary
/// ([`crate::wire`]), not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// First day of the event, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the event, inclusive.
    pub end_date: NaiveDate,
    /// Free text, may be empty.
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display palette token, never used for logic.
    #[serde(default)]
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
}

impl Event {
    /// Whether this event is active on `day` (inclusive on both ends).
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }
}

/// Fixed display palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Indigo,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Indigo => "indigo",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "purple" => Ok(Color::Purple),
            "indigo" => Ok(Color::Indigo),
            other => Err(format!("unknown color '{other}'")),
        }
    }
}
