//! Travel plan documents and generation requests.

pub mod document;
pub mod request;

pub use document::{BudgetLine, ItineraryDay, TravelPlan};
pub use request::{PlanRequest, TravelerProfile};
