//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TripRepository` - Persistence seam for Trip aggregates
//! - `PlanGenerator` - Outbound call to the itinerary generation
//!   service

mod plan_generator;
mod trip_repository;

pub use plan_generator::{GeneratorInfo, PlanDraft, PlanGenerationError, PlanGenerator};
pub use trip_repository::TripRepository;
