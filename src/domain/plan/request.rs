//! Request payload handed to the plan-generation collaborator.

use crate::domain::foundation::{
    BudgetRange, CrowdTolerance, DateRange, Season, TravelStyle,
};
use serde::{Deserialize, Serialize};

/// Per-traveler preference summary included in a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerProfile {
    pub name: String,
    pub travel_style: TravelStyle,
    pub crowd_tolerance: CrowdTolerance,
    pub preferred_seasons: Vec<Season>,
    pub budget: BudgetRange,
    pub interests: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub safety_flags: Vec<String>,
}

/// Everything the generator needs to draft an itinerary.
///
/// Travelers are listed in the trip's member order so the generator's
/// per-person notes line up with how the group sees itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub destination: String,
    pub dates: DateRange,
    pub travelers: Vec<TravelerProfile>,
}

impl PlanRequest {
    /// Creates a request for a destination, window, and traveler list.
    pub fn new(destination: String, dates: DateRange, travelers: Vec<TravelerProfile>) -> Self {
        Self {
            destination,
            dates,
            travelers,
        }
    }
}
