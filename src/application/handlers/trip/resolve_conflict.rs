//! ResolveConflictHandler - Command handler for settling a detected conflict.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::{ConflictId, ResolutionOutcome, Trip};
use crate::ports::TripRepository;

/// Command to record a resolution for a conflict.
#[derive(Debug, Clone)]
pub struct ResolveConflictCommand {
    /// Trip the conflict belongs to.
    pub trip_id: TripId,
    /// Conflict to resolve.
    pub conflict_id: ConflictId,
    /// How the group settled it.
    pub resolution: String,
}

/// Result of a resolution attempt.
#[derive(Debug, Clone)]
pub struct ResolveConflictResult {
    /// The trip after the resolution.
    pub trip: Trip,
    /// Whether the resolution changed anything.
    pub outcome: ResolutionOutcome,
}

/// Error type for conflict resolution.
#[derive(Debug, Clone)]
pub enum ResolveConflictError {
    /// Trip not found.
    TripNotFound(TripId),
    /// Domain error (unknown conflict, already resolved, blank text).
    Domain(DomainError),
}

impl std::fmt::Display for ResolveConflictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveConflictError::TripNotFound(id) => write!(f, "Trip not found: {}", id),
            ResolveConflictError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ResolveConflictError {}

impl From<DomainError> for ResolveConflictError {
    fn from(err: DomainError) -> Self {
        ResolveConflictError::Domain(err)
    }
}

/// Handler for conflict resolution.
pub struct ResolveConflictHandler {
    repository: Arc<dyn TripRepository>,
}

impl ResolveConflictHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ResolveConflictCommand,
    ) -> Result<ResolveConflictResult, ResolveConflictError> {
        // 1. Load the trip
        let mut trip = self
            .repository
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(ResolveConflictError::TripNotFound(cmd.trip_id))?;

        // 2. Record the resolution
        let outcome = trip.resolve_conflict(&cmd.conflict_id, cmd.resolution)?;

        // 3. Persist only when something actually changed
        if outcome == ResolutionOutcome::Resolved {
            for event in trip.take_events() {
                tracing::debug!(?event, "Domain event");
            }
            self.repository.update(&trip).await?;
        }

        Ok(ResolveConflictResult { trip, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTripRepository;
    use crate::domain::analysis::ConflictDetector;
    use crate::domain::foundation::{
        Accommodation, BudgetRange, CrowdTolerance, DateRange, ErrorCode, MemberId, TravelStyle,
    };
    use crate::domain::trip::{ConflictCategory, Member};
    use chrono::NaiveDate;

    fn test_member(name: &str, min: u32, max: u32) -> Member {
        Member::new(
            MemberId::new(),
            name.to_string(),
            BudgetRange::new(min, max).unwrap(),
            vec![],
            vec![],
            CrowdTolerance::NoPreference,
            TravelStyle::Balanced,
            Accommodation::Hotel,
            vec![],
            vec![],
            None,
        )
        .unwrap()
    }

    /// Stores a trip whose two members disagree sharply on budget.
    async fn conflicted_trip(repo: &InMemoryTripRepository) -> Trip {
        let dates = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 8).unwrap(),
        )
        .unwrap();
        let mut trip = Trip::new("Lisbon".to_string(), dates).unwrap();
        let detector = ConflictDetector::default();
        trip.upsert_member(test_member("Mei", 500, 700), &detector)
            .unwrap();
        trip.upsert_member(test_member("Jon", 3000, 5000), &detector)
            .unwrap();
        assert!(!trip.conflicts().is_empty());
        trip.take_events();
        repo.save(&trip).await.unwrap();
        trip
    }

    fn budget_conflict_id() -> ConflictId {
        ConflictId::from_category(ConflictCategory::Budget)
    }

    #[tokio::test]
    async fn resolves_conflict_and_persists() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = conflicted_trip(&repo).await;
        let handler = ResolveConflictHandler::new(repo.clone());

        let result = handler
            .handle(ResolveConflictCommand {
                trip_id: trip.id(),
                conflict_id: budget_conflict_id(),
                resolution: "Aim for the middle of the range".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, ResolutionOutcome::Resolved);
        let conflict = result.trip.conflict(&budget_conflict_id()).unwrap();
        assert!(conflict.is_resolved());

        let stored = repo.find_by_id(&trip.id()).await.unwrap().unwrap();
        assert!(stored.conflict(&budget_conflict_id()).unwrap().is_resolved());
    }

    #[tokio::test]
    async fn identical_resubmission_is_a_noop() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = conflicted_trip(&repo).await;
        let handler = ResolveConflictHandler::new(repo.clone());

        let cmd = ResolveConflictCommand {
            trip_id: trip.id(),
            conflict_id: budget_conflict_id(),
            resolution: "Aim for the middle of the range".to_string(),
        };
        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(first.outcome, ResolutionOutcome::Resolved);
        assert_eq!(second.outcome, ResolutionOutcome::Unchanged);
        assert_eq!(second.trip.updated_at(), first.trip.updated_at());
    }

    #[tokio::test]
    async fn different_text_after_resolution_fails() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = conflicted_trip(&repo).await;
        let handler = ResolveConflictHandler::new(repo.clone());

        handler
            .handle(ResolveConflictCommand {
                trip_id: trip.id(),
                conflict_id: budget_conflict_id(),
                resolution: "Aim for the middle".to_string(),
            })
            .await
            .unwrap();

        let result = handler
            .handle(ResolveConflictCommand {
                trip_id: trip.id(),
                conflict_id: budget_conflict_id(),
                resolution: "Everyone pays their own way".to_string(),
            })
            .await;

        match result {
            Err(ResolveConflictError::Domain(err)) => {
                assert_eq!(err.code, ErrorCode::AlreadyResolved)
            }
            other => panic!("Expected AlreadyResolved, got {:?}", other.map(|r| r.outcome)),
        }
    }

    #[tokio::test]
    async fn fails_for_unknown_conflict() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = conflicted_trip(&repo).await;
        let handler = ResolveConflictHandler::new(repo.clone());

        let result = handler
            .handle(ResolveConflictCommand {
                trip_id: trip.id(),
                conflict_id: ConflictId::from_category(ConflictCategory::Dietary),
                resolution: "Cook at the apartment".to_string(),
            })
            .await;

        match result {
            Err(ResolveConflictError::Domain(err)) => {
                assert_eq!(err.code, ErrorCode::ConflictNotFound)
            }
            other => panic!("Expected ConflictNotFound, got {:?}", other.map(|r| r.outcome)),
        }
    }

    #[tokio::test]
    async fn fails_when_trip_missing() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let handler = ResolveConflictHandler::new(repo);

        let result = handler
            .handle(ResolveConflictCommand {
                trip_id: TripId::new(),
                conflict_id: budget_conflict_id(),
                resolution: "Whatever works".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ResolveConflictError::TripNotFound(_))));
    }
}
