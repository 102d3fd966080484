//! HTTP adapter for the trip module.
//!
//! This module exposes trip operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `POST /api/trips` - Create a new trip
//! - `GET /api/trips` - List trip summaries
//! - `GET /api/trips/{id}` - Fetch full trip details
//! - `PUT /api/trips/{id}/members` - Add or update a member's preferences
//! - `DELETE /api/trips/{id}/members/{member_id}` - Remove a member
//! - `POST /api/trips/{id}/conflicts/{conflict_id}/resolution` - Resolve a conflict
//! - `POST /api/trips/{id}/stage` - Advance the workflow stage
//! - `POST /api/trips/{id}/plan` - Generate a travel plan

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::TripAppState;
pub use routes::trip_router;
