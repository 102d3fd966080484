//! GeneratePlanHandler - Command handler for producing the trip's travel plan.
//!
//! Bridges the trip aggregate and the plan generator port: renders the
//! group's preferences into a request, validates the returned draft,
//! and attaches the accepted plan to the trip.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, TripId, TripStage};
use crate::domain::plan::{PlanRequest, TravelPlan, TravelerProfile};
use crate::domain::trip::Trip;
use crate::ports::{PlanGenerationError, PlanGenerator, TripRepository};

/// Command to generate a plan for a trip.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    /// Trip to plan for.
    pub trip_id: TripId,
}

/// Result of successful plan generation.
#[derive(Debug, Clone)]
pub struct GeneratePlanResult {
    /// The trip with the plan attached.
    pub trip: Trip,
}

/// Error type for plan generation.
#[derive(Debug)]
pub enum GeneratePlanError {
    /// Trip not found.
    TripNotFound(TripId),
    /// The provider call failed.
    Generation(PlanGenerationError),
    /// Domain error (wrong stage, empty group, rejected draft).
    Domain(DomainError),
}

impl std::fmt::Display for GeneratePlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratePlanError::TripNotFound(id) => write!(f, "Trip not found: {}", id),
            GeneratePlanError::Generation(err) => write!(f, "Plan generation failed: {}", err),
            GeneratePlanError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GeneratePlanError {}

impl From<DomainError> for GeneratePlanError {
    fn from(err: DomainError) -> Self {
        GeneratePlanError::Domain(err)
    }
}

impl From<PlanGenerationError> for GeneratePlanError {
    fn from(err: PlanGenerationError) -> Self {
        GeneratePlanError::Generation(err)
    }
}

/// Handler for plan generation.
pub struct GeneratePlanHandler {
    repository: Arc<dyn TripRepository>,
    generator: Arc<dyn PlanGenerator>,
}

impl GeneratePlanHandler {
    pub fn new(repository: Arc<dyn TripRepository>, generator: Arc<dyn PlanGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub async fn handle(
        &self,
        cmd: GeneratePlanCommand,
    ) -> Result<GeneratePlanResult, GeneratePlanError> {
        // 1. Load the trip
        let mut trip = self
            .repository
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(GeneratePlanError::TripNotFound(cmd.trip_id))?;

        // 2. The workflow must have reached the recommendations stage
        if trip.stage() != TripStage::Recommendations {
            return Err(DomainError::new(
                ErrorCode::PlanNotReady,
                "A plan can only be generated at the recommendations stage",
            )
            .with_detail("stage", trip.stage().to_string())
            .into());
        }

        // 3. An empty group has nothing to plan for
        if trip.members().is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyGroup,
                "Cannot generate a plan for a trip with no members",
            )
            .into());
        }

        // 4. Ask the generator for a draft
        let info = self.generator.generator_info();
        tracing::info!(
            trip_id = %trip.id(),
            provider = %info.name,
            model = %info.model,
            "Requesting travel plan"
        );
        let draft = self.generator.generate(plan_request_for(&trip)).await?;

        // 5. Validate the draft into a plan document
        let plan = TravelPlan::new(
            draft.summary,
            draft.itinerary,
            draft.recommendations,
            draft.budget_breakdown,
        )?;

        // 6. Attach and persist
        trip.attach_plan(plan)?;
        for event in trip.take_events() {
            tracing::debug!(?event, "Domain event");
        }
        self.repository.update(&trip).await?;

        Ok(GeneratePlanResult { trip })
    }
}

/// Renders the trip's members into the provider-facing request.
fn plan_request_for(trip: &Trip) -> PlanRequest {
    let travelers = trip
        .members()
        .iter()
        .map(|member| TravelerProfile {
            name: member.name().to_string(),
            travel_style: member.travel_style(),
            crowd_tolerance: member.crowd_tolerance(),
            preferred_seasons: member.seasons().to_vec(),
            budget: member.budget(),
            interests: member.interests().to_vec(),
            dietary_restrictions: member.dietary_restrictions().to_vec(),
            safety_flags: member.safety_flags().to_vec(),
        })
        .collect();

    PlanRequest::new(trip.destination().to_string(), trip.dates(), travelers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::planner::{MockPlanError, MockPlanGenerator};
    use crate::adapters::storage::InMemoryTripRepository;
    use crate::domain::analysis::ConflictDetector;
    use crate::domain::foundation::{
        Accommodation, BudgetRange, CrowdTolerance, DateRange, MemberId, TravelStyle,
    };
    use crate::domain::trip::Member;
    use crate::ports::PlanDraft;
    use chrono::NaiveDate;

    fn test_member(name: &str) -> Member {
        Member::new(
            MemberId::new(),
            name.to_string(),
            BudgetRange::new(800, 1200).unwrap(),
            vec![],
            vec!["food".to_string()],
            CrowdTolerance::NoPreference,
            TravelStyle::Balanced,
            Accommodation::Hotel,
            vec!["vegetarian".to_string()],
            vec![],
            None,
        )
        .unwrap()
    }

    async fn trip_at_recommendations(repo: &InMemoryTripRepository, members: Vec<Member>) -> Trip {
        let dates = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 8).unwrap(),
        )
        .unwrap();
        let mut trip = Trip::new("Lisbon".to_string(), dates).unwrap();
        let detector = ConflictDetector::default();
        for member in members {
            trip.upsert_member(member, &detector).unwrap();
        }
        trip.advance_stage(TripStage::Conflicts).unwrap();
        trip.advance_stage(TripStage::Recommendations).unwrap();
        trip.take_events();
        repo.save(&trip).await.unwrap();
        trip
    }

    #[tokio::test]
    async fn generates_and_attaches_plan() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = trip_at_recommendations(&repo, vec![test_member("Mei")]).await;
        let planner = Arc::new(MockPlanGenerator::new());
        let handler = GeneratePlanHandler::new(repo.clone(), planner.clone());

        let result = handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await
            .unwrap();

        let plan = result.trip.plan().unwrap();
        assert!(!plan.itinerary().is_empty());

        let stored = repo.find_by_id(&trip.id()).await.unwrap().unwrap();
        assert!(stored.plan().is_some());
    }

    #[tokio::test]
    async fn request_carries_member_preferences() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = trip_at_recommendations(&repo, vec![test_member("Mei")]).await;
        let planner = Arc::new(MockPlanGenerator::new());
        let handler = GeneratePlanHandler::new(repo, planner.clone());

        handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await
            .unwrap();

        let calls = planner.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].destination, "Lisbon");
        assert_eq!(calls[0].travelers.len(), 1);
        assert_eq!(calls[0].travelers[0].name, "Mei");
        assert_eq!(calls[0].travelers[0].dietary_restrictions, vec!["vegetarian"]);
    }

    #[tokio::test]
    async fn fails_before_recommendations_stage() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let dates = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 8).unwrap(),
        )
        .unwrap();
        let mut trip = Trip::new("Lisbon".to_string(), dates).unwrap();
        trip.take_events();
        repo.save(&trip).await.unwrap();

        let planner = Arc::new(MockPlanGenerator::new());
        let handler = GeneratePlanHandler::new(repo, planner.clone());

        let result = handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await;

        match result {
            Err(GeneratePlanError::Domain(err)) => {
                assert_eq!(err.code, ErrorCode::PlanNotReady)
            }
            other => panic!("Expected PlanNotReady, got {:?}", other.map(|r| r.trip.stage())),
        }
        assert_eq!(planner.call_count(), 0);
    }

    #[tokio::test]
    async fn fails_for_empty_group_without_calling_provider() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = trip_at_recommendations(&repo, vec![]).await;
        let planner = Arc::new(MockPlanGenerator::new());
        let handler = GeneratePlanHandler::new(repo, planner.clone());

        let result = handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await;

        match result {
            Err(GeneratePlanError::Domain(err)) => {
                assert_eq!(err.code, ErrorCode::EmptyGroup)
            }
            other => panic!("Expected EmptyGroup, got {:?}", other.map(|r| r.trip.stage())),
        }
        assert_eq!(planner.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_failure_leaves_trip_unchanged() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = trip_at_recommendations(&repo, vec![test_member("Mei")]).await;
        let planner = Arc::new(MockPlanGenerator::new().with_error(MockPlanError::Unavailable {
            message: "Provider down".to_string(),
        }));
        let handler = GeneratePlanHandler::new(repo.clone(), planner);

        let result = handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await;

        assert!(matches!(
            result,
            Err(GeneratePlanError::Generation(
                PlanGenerationError::Unavailable { .. }
            ))
        ));

        let stored = repo.find_by_id(&trip.id()).await.unwrap().unwrap();
        assert!(stored.plan().is_none());
    }

    #[tokio::test]
    async fn empty_itinerary_draft_is_rejected() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = trip_at_recommendations(&repo, vec![test_member("Mei")]).await;
        let planner = Arc::new(MockPlanGenerator::new().with_draft(PlanDraft {
            summary: "A plan with no days".to_string(),
            itinerary: vec![],
            recommendations: vec![],
            budget_breakdown: vec![],
        }));
        let handler = GeneratePlanHandler::new(repo.clone(), planner);

        let result = handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await;

        match result {
            Err(GeneratePlanError::Domain(err)) => {
                assert_eq!(err.code, ErrorCode::InvalidPlan)
            }
            other => panic!("Expected InvalidPlan, got {:?}", other.map(|r| r.trip.stage())),
        }

        let stored = repo.find_by_id(&trip.id()).await.unwrap().unwrap();
        assert!(stored.plan().is_none());
    }

    #[tokio::test]
    async fn regeneration_replaces_previous_plan() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let trip = trip_at_recommendations(&repo, vec![test_member("Mei")]).await;
        let mut second = MockPlanGenerator::sample_draft();
        second.summary = "Second attempt".to_string();
        let planner = Arc::new(
            MockPlanGenerator::new()
                .with_draft(MockPlanGenerator::sample_draft())
                .with_draft(second),
        );
        let handler = GeneratePlanHandler::new(repo.clone(), planner);

        handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await
            .unwrap();
        let result = handler
            .handle(GeneratePlanCommand { trip_id: trip.id() })
            .await
            .unwrap();

        assert_eq!(result.trip.plan().unwrap().summary(), "Second attempt");
    }

    #[tokio::test]
    async fn fails_when_trip_missing() {
        let repo = Arc::new(InMemoryTripRepository::new());
        let planner = Arc::new(MockPlanGenerator::new());
        let handler = GeneratePlanHandler::new(repo, planner);

        let result = handler
            .handle(GeneratePlanCommand {
                trip_id: TripId::new(),
            })
            .await;

        assert!(matches!(result, Err(GeneratePlanError::TripNotFound(_))));
    }
}
