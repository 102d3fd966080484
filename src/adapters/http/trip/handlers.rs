//! HTTP handlers for trip endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. Path and body fields arrive as strings and are parsed here;
//! everything past this point works with domain types.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;

use crate::application::handlers::trip::{
    AdvanceStageCommand, AdvanceStageError, AdvanceStageHandler, CreateTripCommand,
    CreateTripError, CreateTripHandler, GeneratePlanCommand, GeneratePlanError,
    GeneratePlanHandler, GetTripError, GetTripHandler, GetTripQuery, ListTripsError,
    ListTripsHandler, RemoveMemberCommand, RemoveMemberError, RemoveMemberHandler,
    ResolveConflictCommand, ResolveConflictError, ResolveConflictHandler, SaveMemberCommand,
    SaveMemberError, SaveMemberHandler,
};
use crate::domain::analysis::ConflictDetector;
use crate::domain::foundation::{
    BudgetRange, DateRange, DomainError, ErrorCode, MemberId, TripId, ValidationError,
};
use crate::domain::trip::ConflictId;
use crate::ports::{PlanGenerator, TripRepository};

use super::dto::{
    AdvanceStageRequest, CreateTripRequest, ErrorResponse, ResolveConflictRequest,
    ResolveConflictResponse, SaveMemberRequest, SaveMemberResponse, TripResponse,
    TripSummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct TripAppState {
    pub repository: Arc<dyn TripRepository>,
    pub detector: Arc<ConflictDetector>,
    pub generator: Arc<dyn PlanGenerator>,
}

impl TripAppState {
    pub fn create_trip_handler(&self) -> CreateTripHandler {
        CreateTripHandler::new(self.repository.clone())
    }

    pub fn get_trip_handler(&self) -> GetTripHandler {
        GetTripHandler::new(self.repository.clone())
    }

    pub fn list_trips_handler(&self) -> ListTripsHandler {
        ListTripsHandler::new(self.repository.clone())
    }

    pub fn save_member_handler(&self) -> SaveMemberHandler {
        SaveMemberHandler::new(self.repository.clone(), self.detector.clone())
    }

    pub fn remove_member_handler(&self) -> RemoveMemberHandler {
        RemoveMemberHandler::new(self.repository.clone(), self.detector.clone())
    }

    pub fn resolve_conflict_handler(&self) -> ResolveConflictHandler {
        ResolveConflictHandler::new(self.repository.clone())
    }

    pub fn advance_stage_handler(&self) -> AdvanceStageHandler {
        AdvanceStageHandler::new(self.repository.clone())
    }

    pub fn generate_plan_handler(&self) -> GeneratePlanHandler {
        GeneratePlanHandler::new(self.repository.clone(), self.generator.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/trips - Create a new trip
pub async fn create_trip(
    State(state): State<TripAppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<impl IntoResponse, TripApiError> {
    let start = parse_date(&request.start_date, "start_date")?;
    let end = parse_date(&request.end_date, "end_date")?;
    let dates = DateRange::new(start, end)?;

    let handler = state.create_trip_handler();
    let cmd = CreateTripCommand {
        destination: request.destination,
        dates,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(TripResponse::from(&result.trip))))
}

/// PUT /api/trips/:id/members - Add or update a member's preferences
pub async fn save_member(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<SaveMemberRequest>,
) -> Result<impl IntoResponse, TripApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let member_id = match request.id {
        Some(raw) => Some(
            raw.parse::<MemberId>()
                .map_err(|_| TripApiError::BadRequest("Invalid member ID format".to_string()))?,
        ),
        None => None,
    };
    let budget = BudgetRange::new(request.budget_min, request.budget_max)?;

    let handler = state.save_member_handler();
    let cmd = SaveMemberCommand {
        trip_id,
        member_id,
        name: request.name,
        budget,
        seasons: request.seasons,
        interests: request.interests,
        crowd_tolerance: request.crowd_tolerance,
        travel_style: request.travel_style,
        accommodation: request.accommodation,
        dietary_restrictions: request.dietary_restrictions,
        safety_flags: request.safety_flags,
        avatar: request.avatar,
    };

    let result = handler.handle(cmd).await?;

    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let response = SaveMemberResponse {
        member_id: result.member_id.to_string(),
        created: result.created,
        trip: TripResponse::from(&result.trip),
    };

    Ok((status, Json(response)))
}

/// DELETE /api/trips/:id/members/:member_id - Remove a member
pub async fn remove_member(
    State(state): State<TripAppState>,
    Path((trip_id, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, TripApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let member_id: MemberId = member_id
        .parse()
        .map_err(|_| TripApiError::BadRequest("Invalid member ID format".to_string()))?;

    let handler = state.remove_member_handler();
    let cmd = RemoveMemberCommand { trip_id, member_id };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(TripResponse::from(&result.trip))))
}

/// POST /api/trips/:id/conflicts/:conflict_id/resolution - Record a resolution
pub async fn resolve_conflict(
    State(state): State<TripAppState>,
    Path((trip_id, conflict_id)): Path<(String, String)>,
    Json(request): Json<ResolveConflictRequest>,
) -> Result<impl IntoResponse, TripApiError> {
    let trip_id = parse_trip_id(&trip_id)?;
    let conflict_id = ConflictId::new(conflict_id);

    let handler = state.resolve_conflict_handler();
    let cmd = ResolveConflictCommand {
        trip_id,
        conflict_id,
        resolution: request.resolution,
    };

    let result = handler.handle(cmd).await?;

    let response = ResolveConflictResponse::new(result.outcome, TripResponse::from(&result.trip));

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/trips/:id/stage - Advance the trip workflow one stage
pub async fn advance_stage(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
    Json(request): Json<AdvanceStageRequest>,
) -> Result<impl IntoResponse, TripApiError> {
    let trip_id = parse_trip_id(&trip_id)?;

    let handler = state.advance_stage_handler();
    let cmd = AdvanceStageCommand {
        trip_id,
        target: request.target,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(TripResponse::from(&result.trip))))
}

/// POST /api/trips/:id/plan - Generate a travel plan for the trip
pub async fn generate_plan(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, TripApiError> {
    let trip_id = parse_trip_id(&trip_id)?;

    let handler = state.generate_plan_handler();
    let cmd = GeneratePlanCommand { trip_id };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(TripResponse::from(&result.trip))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/trips - List trip summaries, newest first
pub async fn list_trips(
    State(state): State<TripAppState>,
) -> Result<impl IntoResponse, TripApiError> {
    let handler = state.list_trips_handler();
    let result = handler.handle().await?;

    let response: Vec<TripSummaryResponse> =
        result.trips.iter().map(TripSummaryResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/trips/:id - Fetch full trip details
pub async fn get_trip(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, TripApiError> {
    let trip_id = parse_trip_id(&trip_id)?;

    let handler = state.get_trip_handler();
    let result = handler.handle(GetTripQuery { trip_id }).await?;

    Ok((StatusCode::OK, Json(TripResponse::from(&result.trip))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Parsing Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_trip_id(raw: &str) -> Result<TripId, TripApiError> {
    raw.parse()
        .map_err(|_| TripApiError::BadRequest("Invalid trip ID format".to_string()))
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, TripApiError> {
    raw.parse().map_err(|_| {
        TripApiError::BadRequest(format!("Invalid {}, expected YYYY-MM-DD", field))
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum TripApiError {
    /// Malformed path segment or request field.
    BadRequest(String),
    /// Input failed domain validation.
    Validation(String),
    /// Trip, member, or conflict does not exist.
    NotFound(String),
    /// The request contradicts the trip's current state.
    Conflict(String),
    /// The plan provider failed.
    Upstream(String),
    /// Storage or other infrastructure failure.
    Internal(String),
}

impl From<DomainError> for TripApiError {
    fn from(err: DomainError) -> Self {
        let message = err.message.clone();
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => TripApiError::Validation(message),
            ErrorCode::TripNotFound
            | ErrorCode::MemberNotFound
            | ErrorCode::ConflictNotFound => TripApiError::NotFound(message),
            ErrorCode::EmptyGroup
            | ErrorCode::InvalidStageTransition
            | ErrorCode::AlreadyResolved
            | ErrorCode::InvalidPlan
            | ErrorCode::PlanNotReady => TripApiError::Conflict(message),
            ErrorCode::PlanGenerationFailed => TripApiError::Upstream(message),
            ErrorCode::StorageError
            | ErrorCode::SerializationFailed
            | ErrorCode::InternalError => TripApiError::Internal(message),
        }
    }
}

impl From<ValidationError> for TripApiError {
    fn from(err: ValidationError) -> Self {
        TripApiError::from(DomainError::from(err))
    }
}

impl From<CreateTripError> for TripApiError {
    fn from(err: CreateTripError) -> Self {
        match err {
            CreateTripError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<GetTripError> for TripApiError {
    fn from(err: GetTripError) -> Self {
        match err {
            GetTripError::TripNotFound(id) => {
                TripApiError::NotFound(format!("Trip not found: {}", id))
            }
            GetTripError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<ListTripsError> for TripApiError {
    fn from(err: ListTripsError) -> Self {
        match err {
            ListTripsError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<SaveMemberError> for TripApiError {
    fn from(err: SaveMemberError) -> Self {
        match err {
            SaveMemberError::TripNotFound(id) => {
                TripApiError::NotFound(format!("Trip not found: {}", id))
            }
            SaveMemberError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<RemoveMemberError> for TripApiError {
    fn from(err: RemoveMemberError) -> Self {
        match err {
            RemoveMemberError::TripNotFound(id) => {
                TripApiError::NotFound(format!("Trip not found: {}", id))
            }
            RemoveMemberError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<ResolveConflictError> for TripApiError {
    fn from(err: ResolveConflictError) -> Self {
        match err {
            ResolveConflictError::TripNotFound(id) => {
                TripApiError::NotFound(format!("Trip not found: {}", id))
            }
            ResolveConflictError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<AdvanceStageError> for TripApiError {
    fn from(err: AdvanceStageError) -> Self {
        match err {
            AdvanceStageError::TripNotFound(id) => {
                TripApiError::NotFound(format!("Trip not found: {}", id))
            }
            AdvanceStageError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl From<GeneratePlanError> for TripApiError {
    fn from(err: GeneratePlanError) -> Self {
        match err {
            GeneratePlanError::TripNotFound(id) => {
                TripApiError::NotFound(format!("Trip not found: {}", id))
            }
            GeneratePlanError::Generation(e) => {
                TripApiError::Upstream(format!("Plan generation failed: {}", e))
            }
            GeneratePlanError::Domain(e) => TripApiError::from(e),
        }
    }
}

impl IntoResponse for TripApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            TripApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            TripApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::validation(msg))
            }
            TripApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            TripApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::conflict(msg)),
            TripApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, ErrorResponse::upstream(msg)),
            TripApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::planner::MockPlanGenerator;
    use crate::adapters::storage::InMemoryTripRepository;
    use crate::domain::foundation::ErrorCode;

    fn test_state() -> TripAppState {
        TripAppState {
            repository: Arc::new(InMemoryTripRepository::new()),
            detector: Arc::new(ConflictDetector::default()),
            generator: Arc::new(MockPlanGenerator::new()),
        }
    }

    #[test]
    fn api_error_maps_bad_request_to_400() {
        let err = TripApiError::BadRequest("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_validation_to_422() {
        let err = TripApiError::Validation("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn api_error_maps_not_found_to_404() {
        let err = TripApiError::NotFound("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_conflict_to_409() {
        let err = TripApiError::Conflict("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn api_error_maps_upstream_to_502() {
        let err = TripApiError::Upstream("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn api_error_maps_internal_to_500() {
        let err = TripApiError::Internal("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn stage_errors_map_to_conflict() {
        let err = DomainError::new(ErrorCode::InvalidStageTransition, "no skipping");
        assert!(matches!(TripApiError::from(err), TripApiError::Conflict(_)));

        let err = DomainError::new(ErrorCode::PlanNotReady, "not at recommendations");
        assert!(matches!(TripApiError::from(err), TripApiError::Conflict(_)));
    }

    #[test]
    fn lookup_errors_map_to_not_found() {
        let err = DomainError::new(ErrorCode::ConflictNotFound, "no such conflict");
        assert!(matches!(TripApiError::from(err), TripApiError::NotFound(_)));
    }

    #[test]
    fn provider_failure_maps_to_upstream() {
        let err = DomainError::new(ErrorCode::PlanGenerationFailed, "provider down");
        assert!(matches!(TripApiError::from(err), TripApiError::Upstream(_)));
    }

    #[test]
    fn state_creates_handlers() {
        let state = test_state();
        let _ = state.create_trip_handler();
        let _ = state.get_trip_handler();
        let _ = state.list_trips_handler();
        let _ = state.save_member_handler();
        let _ = state.remove_member_handler();
        let _ = state.resolve_conflict_handler();
        let _ = state.advance_stage_handler();
        let _ = state.generate_plan_handler();
    }
}
