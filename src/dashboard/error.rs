//! Dashboard error types

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Range of {days} days exceeds the {max} day limit")]
    RangeTooLong { days: usize, max: usize },

    #[error("Cannot go back {days} days from {date}")]
    DateOutOfRange { date: NaiveDate, days: u32 },

    #[error("Unsupported history preset: {0} days (expected 7, 30, 90 or 365)")]
    InvalidPreset(u32),

    #[error("Unknown shift: {0}")]
    UnknownShift(String),

    #[error("Unknown series: {0}")]
    UnknownSeries(String),

    #[error("Unknown dashboard view: {0}")]
    UnknownView(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
