//! ListTripsHandler - Query handler for the trip overview.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// Result of listing trips.
#[derive(Debug, Clone)]
pub struct ListTripsResult {
    /// All trips, newest first.
    pub trips: Vec<Trip>,
}

/// Error type for listing trips.
#[derive(Debug, Clone)]
pub enum ListTripsError {
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for ListTripsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListTripsError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ListTripsError {}

impl From<DomainError> for ListTripsError {
    fn from(err: DomainError) -> Self {
        ListTripsError::Domain(err)
    }
}

/// Handler for listing trips.
pub struct ListTripsHandler {
    repository: Arc<dyn TripRepository>,
}

impl ListTripsHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ListTripsResult, ListTripsError> {
        let trips = self.repository.list().await?;
        Ok(ListTripsResult { trips })
    }
}
