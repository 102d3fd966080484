//! AdvanceStageHandler - Command handler for moving a trip forward in the workflow.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TripId, TripStage};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// Command to advance a trip to the next stage.
#[derive(Debug, Clone)]
pub struct AdvanceStageCommand {
    /// Trip to advance.
    pub trip_id: TripId,
    /// The stage to move to. Must be the immediate successor.
    pub target: TripStage,
}

/// Result of a successful stage advance.
#[derive(Debug, Clone)]
pub struct AdvanceStageResult {
    /// The trip at its new stage.
    pub trip: Trip,
    /// Conflicts still open at the time of the advance.
    pub unresolved_conflicts: usize,
}

/// Error type for stage advancement.
#[derive(Debug, Clone)]
pub enum AdvanceStageError {
    /// Trip not found.
    TripNotFound(TripId),
    /// Domain error (backward or skipping transition).
    Domain(DomainError),
}

impl std::fmt::Display for AdvanceStageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvanceStageError::TripNotFound(id) => write!(f, "Trip not found: {}", id),
            AdvanceStageError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AdvanceStageError {}

impl From<DomainError> for AdvanceStageError {
    fn from(err: DomainError) -> Self {
        AdvanceStageError::Domain(err)
    }
}

/// Handler for stage advancement.
pub struct AdvanceStageHandler {
    repository: Arc<dyn TripRepository>,
}

impl AdvanceStageHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AdvanceStageCommand,
    ) -> Result<AdvanceStageResult, AdvanceStageError> {
        // 1. Load the trip
        let mut trip = self
            .repository
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(AdvanceStageError::TripNotFound(cmd.trip_id))?;

        // 2. Advance; open conflicts are advisory, not a gate
        trip.advance_stage(cmd.target)?;

        let unresolved_conflicts = trip.unresolved_conflict_count();
        if unresolved_conflicts > 0 {
            tracing::warn!(
                trip_id = %trip.id(),
                stage = %trip.stage(),
                unresolved_conflicts,
                "Advancing with unresolved conflicts"
            );
        }

        // 3. Drain and log domain events
        for event in trip.take_events() {
            tracing::debug!(?event, "Domain event");
        }

        // 4. Persist
        self.repository.update(&trip).await?;

        Ok(AdvanceStageResult {
            trip,
            unresolved_conflicts,
        })
    }
}
