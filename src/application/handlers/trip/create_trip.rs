//! CreateTripHandler - Command handler for starting a new trip.

use std::sync::Arc;

use crate::domain::foundation::{DateRange, DomainError};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// Command to create a new trip.
#[derive(Debug, Clone)]
pub struct CreateTripCommand {
    /// Where the group wants to go.
    pub destination: String,
    /// Travel window for the trip.
    pub dates: DateRange,
}

/// Result of successful trip creation.
#[derive(Debug, Clone)]
pub struct CreateTripResult {
    /// The created trip.
    pub trip: Trip,
}

/// Error type for trip creation.
#[derive(Debug, Clone)]
pub enum CreateTripError {
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for CreateTripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateTripError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateTripError {}

impl From<DomainError> for CreateTripError {
    fn from(err: DomainError) -> Self {
        CreateTripError::Domain(err)
    }
}

/// Handler for creating trips.
pub struct CreateTripHandler {
    repository: Arc<dyn TripRepository>,
}

impl CreateTripHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateTripCommand,
    ) -> Result<CreateTripResult, CreateTripError> {
        // 1. Create the trip aggregate
        let mut trip = Trip::new(cmd.destination, cmd.dates)?;

        // 2. Drain and log domain events
        for event in trip.take_events() {
            tracing::debug!(?event, "Domain event");
        }

        // 3. Persist
        self.repository.save(&trip).await?;

        Ok(CreateTripResult { trip })
    }
}
