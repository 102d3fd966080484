//! Foundation types shared across the domain layer.

pub mod accommodation;
pub mod budget;
pub mod crowd_tolerance;
pub mod date_range;
pub mod errors;
pub mod ids;
pub mod season;
pub mod state_machine;
pub mod timestamp;
pub mod travel_style;
pub mod trip_stage;

pub use accommodation::Accommodation;
pub use budget::BudgetRange;
pub use crowd_tolerance::CrowdTolerance;
pub use date_range::DateRange;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MemberId, TripId};
pub use season::Season;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use travel_style::TravelStyle;
pub use trip_stage::TripStage;
