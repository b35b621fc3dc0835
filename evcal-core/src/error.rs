//! Error types for the evcal ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in evcal operations.
#[derive(Error, Debug)]
pub enum EvcalError {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for evcal operations.
pub type EvcalResult<T> = Result<T, EvcalError>;
