//! Generated travel plan document.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use serde::{Deserialize, Serialize};

/// One day of the generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number within the trip.
    pub day: u32,
    /// Short headline for the day.
    pub title: String,
    /// Activities planned for the day, in order.
    pub activities: Vec<String>,
}

/// One line of the plan's budget breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// What the money goes to, e.g. "Accommodation".
    pub label: String,
    /// Estimated per-person amount in whole currency units.
    pub amount: u32,
}

/// The structured plan returned by the generation collaborator.
///
/// The generator's output is treated as opaque prose apart from its
/// shape: a plan is only accepted if it carries at least one itinerary
/// day. Everything else is surfaced to the group as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    summary: String,
    itinerary: Vec<ItineraryDay>,
    recommendations: Vec<String>,
    budget_breakdown: Vec<BudgetLine>,
    generated_at: Timestamp,
}

impl TravelPlan {
    /// Accepts a generated plan after validating its shape.
    ///
    /// # Errors
    ///
    /// - `InvalidPlan` if the itinerary is empty
    pub fn new(
        summary: String,
        itinerary: Vec<ItineraryDay>,
        recommendations: Vec<String>,
        budget_breakdown: Vec<BudgetLine>,
    ) -> Result<Self, DomainError> {
        if itinerary.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InvalidPlan,
                "Generated plan has no day-by-day itinerary",
            ));
        }
        Ok(Self {
            summary,
            itinerary,
            recommendations,
            budget_breakdown,
            generated_at: Timestamp::now(),
        })
    }

    /// Returns the plan summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the day-by-day itinerary.
    pub fn itinerary(&self) -> &[ItineraryDay] {
        &self.itinerary
    }

    /// Returns the free-form recommendations.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Returns the budget breakdown lines.
    pub fn budget_breakdown(&self) -> &[BudgetLine] {
        &self.budget_breakdown
    }

    /// Returns when the plan was generated.
    pub fn generated_at(&self) -> &Timestamp {
        &self.generated_at
    }
}
