//! Per-person budget range value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A member's budget band for the whole trip, in whole currency units.
///
/// The range is inclusive on both ends and `min` may equal `max` for a
/// member with a fixed budget. Aggregation works on the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    min: u32,
    max: u32,
}

impl BudgetRange {
    /// Creates a budget range, validating that min does not exceed max.
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::invalid_format(
                "budget_range",
                format!("min {} exceeds max {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    /// Lower bound of the range.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Midpoint of the range, used when averaging across a group.
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
