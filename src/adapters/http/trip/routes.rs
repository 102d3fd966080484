//! Route configuration for trip endpoints.
//!
//! Configures Axum router with trip-related routes.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    advance_stage, create_trip, generate_plan, get_trip, list_trips, remove_member,
    resolve_conflict, save_member, TripAppState,
};

/// Creates the trip router with all endpoints.
///
/// Routes:
/// - `POST /api/trips` - Create a trip
/// - `GET /api/trips` - List trip summaries
/// - `GET /api/trips/:id` - Fetch full trip details
/// - `PUT /api/trips/:id/members` - Add or update a member
/// - `DELETE /api/trips/:id/members/:member_id` - Remove a member
/// - `POST /api/trips/:id/conflicts/:conflict_id/resolution` - Resolve a conflict
/// - `POST /api/trips/:id/stage` - Advance the workflow stage
/// - `POST /api/trips/:id/plan` - Generate a travel plan
pub fn trip_router() -> Router<TripAppState> {
    Router::new()
        .route("/api/trips", post(create_trip).get(list_trips))
        .route("/api/trips/:id", get(get_trip))
        .route("/api/trips/:id/members", put(save_member))
        .route("/api/trips/:id/members/:member_id", delete(remove_member))
        .route(
            "/api/trips/:id/conflicts/:conflict_id/resolution",
            post(resolve_conflict),
        )
        .route("/api/trips/:id/stage", post(advance_stage))
        .route("/api/trips/:id/plan", post(generate_plan))
}
