//! GetTripHandler - Query handler for fetching a single trip.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// Query to fetch a trip by id.
#[derive(Debug, Clone)]
pub struct GetTripQuery {
    /// Trip to fetch.
    pub trip_id: TripId,
}

/// Result of a trip lookup.
#[derive(Debug, Clone)]
pub struct GetTripResult {
    /// The trip, with all derived state as persisted.
    pub trip: Trip,
}

/// Error type for trip lookup.
#[derive(Debug, Clone)]
pub enum GetTripError {
    /// Trip not found.
    TripNotFound(TripId),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for GetTripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetTripError::TripNotFound(id) => write!(f, "Trip not found: {}", id),
            GetTripError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetTripError {}

impl From<DomainError> for GetTripError {
    fn from(err: DomainError) -> Self {
        GetTripError::Domain(err)
    }
}

/// Handler for fetching trips.
pub struct GetTripHandler {
    repository: Arc<dyn TripRepository>,
}

impl GetTripHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTripQuery) -> Result<GetTripResult, GetTripError> {
        let trip = self
            .repository
            .find_by_id(&query.trip_id)
            .await?
            .ok_or(GetTripError::TripNotFound(query.trip_id))?;

        Ok(GetTripResult { trip })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTripRepository;
    use crate::domain::foundation::DateRange;
    use chrono::NaiveDate;

    fn test_trip() -> Trip {
        let dates = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 8).unwrap(),
        )
        .unwrap();
        let mut trip = Trip::new("Lisbon".to_string(), dates).unwrap();
        trip.take_events();
        trip
    }

    #[tokio::test]
    async fn returns_stored_trip() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = test_trip();
        repo.save(&trip).await.unwrap();

        let handler = GetTripHandler::new(repo);
        let result = handler
            .handle(GetTripQuery { trip_id: trip.id() })
            .await
            .unwrap();

        assert_eq!(result.trip, trip);
    }

    #[tokio::test]
    async fn fails_when_trip_missing() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let handler = GetTripHandler::new(repo);

        let missing = TripId::new();
        let result = handler.handle(GetTripQuery { trip_id: missing }).await;

        assert!(matches!(
            result,
            Err(GetTripError::TripNotFound(id)) if id == missing
        ));
    }
}
