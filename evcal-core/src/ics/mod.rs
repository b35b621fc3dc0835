//! ICS export and import.

pub mod generate;
pub mod parse;

pub use generate::{escape_text, generate_ics};
pub use parse::{parse_calendar, ParsedCalendar};
