//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::trip::{
    AdvanceStageCommand, AdvanceStageHandler, AdvanceStageResult,
    CreateTripCommand, CreateTripHandler, CreateTripResult,
    GeneratePlanCommand, GeneratePlanHandler, GeneratePlanResult,
    GetTripHandler, GetTripQuery, GetTripResult,
    ListTripsHandler, ListTripsResult,
    RemoveMemberCommand, RemoveMemberHandler, RemoveMemberResult,
    ResolveConflictCommand, ResolveConflictHandler, ResolveConflictResult,
    SaveMemberCommand, SaveMemberHandler, SaveMemberResult,
};
