//! Calendar periods
//!
//! Leases are billed over a closed range of calendar days. A period that
//! starts and ends on the same day covers one day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Period is missing its {0} date")]
    MissingBoundary(&'static str),

    #[error("Unparseable date: {0}")]
    InvalidDate(String),
}

/// An inclusive range of calendar days
///
/// Deserializing runs the same check as [`DatePeriod::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodFields")]
pub struct DatePeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct PeriodFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PeriodFields> for DatePeriod {
    type Error = TemporalError;

    fn try_from(fields: PeriodFields) -> Result<Self, Self::Error> {
        Self::new(fields.start, fields.end)
    }
}

impl DatePeriod {
    /// Creates a period, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a period from optional boundaries as they arrive from a loader
    pub fn from_options(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, TemporalError> {
        let start = start.ok_or(TemporalError::MissingBoundary("start"))?;
        let end = end.ok_or(TemporalError::MissingBoundary("end"))?;
        Self::new(start, end)
    }

    /// Parses ISO-8601 (`YYYY-MM-DD`) boundaries
    pub fn parse(start: &str, end: &str) -> Result<Self, TemporalError> {
        let parse = |text: &str| {
            NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .map_err(|_| TemporalError::InvalidDate(text.to_string()))
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// First day of the period
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both boundaries
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns true if the given day falls inside the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
