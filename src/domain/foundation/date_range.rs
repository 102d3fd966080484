//! Trip date window value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The calendar window a trip occupies, inclusive of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a date range, validating that the end is not before the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::invalid_format(
                "date_range",
                format!("end {} is before start {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    /// First day of the trip.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the trip.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of nights spent away. A same-day trip has zero nights.
    pub fn nights(&self) -> u32 {
        (self.end - self.start).num_days() as u32
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
