//! RemoveMemberHandler - Command handler for dropping a member from a trip.

use std::sync::Arc;

use crate::domain::analysis::ConflictDetector;
use crate::domain::foundation::{DomainError, MemberId, TripId};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// Command to remove a member.
#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    /// Trip to modify.
    pub trip_id: TripId,
    /// Member to remove.
    pub member_id: MemberId,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct RemoveMemberResult {
    /// The trip with refreshed aggregation and conflicts.
    pub trip: Trip,
}

/// Error type for member removal.
#[derive(Debug, Clone)]
pub enum RemoveMemberError {
    /// Trip not found.
    TripNotFound(TripId),
    /// Domain error (including unknown member).
    Domain(DomainError),
}

impl std::fmt::Display for RemoveMemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveMemberError::TripNotFound(id) => write!(f, "Trip not found: {}", id),
            RemoveMemberError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RemoveMemberError {}

impl From<DomainError> for RemoveMemberError {
    fn from(err: DomainError) -> Self {
        RemoveMemberError::Domain(err)
    }
}

/// Handler for member removal.
pub struct RemoveMemberHandler {
    repository: Arc<dyn TripRepository>,
    detector: Arc<ConflictDetector>,
}

impl RemoveMemberHandler {
    pub fn new(repository: Arc<dyn TripRepository>, detector: Arc<ConflictDetector>) -> Self {
        Self {
            repository,
            detector,
        }
    }

    pub async fn handle(
        &self,
        cmd: RemoveMemberCommand,
    ) -> Result<RemoveMemberResult, RemoveMemberError> {
        // 1. Load the trip
        let mut trip = self
            .repository
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(RemoveMemberError::TripNotFound(cmd.trip_id))?;

        // 2. Remove, re-running aggregation and detection
        trip.remove_member(cmd.member_id, &self.detector)?;

        // 3. Drain and log domain events
        for event in trip.take_events() {
            tracing::debug!(?event, "Domain event");
        }

        // 4. Persist
        self.repository.update(&trip).await?;

        Ok(RemoveMemberResult { trip })
    }
}
