//! Trip command and query handlers.
//!
//! Handlers for the trip lifecycle: creating trips, managing members,
//! settling conflicts, moving through the workflow, and generating plans.

// Command handlers
mod advance_stage;
mod create_trip;
mod generate_plan;
mod remove_member;
mod resolve_conflict;
mod save_member;

// Query handlers
mod get_trip;
mod list_trips;

pub use advance_stage::{
    AdvanceStageCommand, AdvanceStageError, AdvanceStageHandler, AdvanceStageResult,
};
pub use create_trip::{CreateTripCommand, CreateTripError, CreateTripHandler, CreateTripResult};
pub use generate_plan::{
    GeneratePlanCommand, GeneratePlanError, GeneratePlanHandler, GeneratePlanResult,
};
pub use remove_member::{
    RemoveMemberCommand, RemoveMemberError, RemoveMemberHandler, RemoveMemberResult,
};
pub use resolve_conflict::{
    ResolveConflictCommand, ResolveConflictError, ResolveConflictHandler, ResolveConflictResult,
};
pub use save_member::{SaveMemberCommand, SaveMemberError, SaveMemberHandler, SaveMemberResult};

// Query handlers
pub use get_trip::{GetTripError, GetTripHandler, GetTripQuery, GetTripResult};
pub use list_trips::{ListTripsError, ListTripsHandler, ListTripsResult};
