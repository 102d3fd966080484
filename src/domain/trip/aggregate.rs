//! Trip aggregate - the root entity for a group planning session.
//!
//! A Trip owns its members, the derived preference summary, the active
//! conflict list, and the workflow stage. Any mutation to the member
//! list re-aggregates and re-detects before the call returns, so
//! callers never observe members and conflicts out of step with each
//! other.

use crate::domain::analysis::{AggregatedPreferences, ConflictDetector, PreferenceAggregator};
use crate::domain::foundation::{
    DateRange, DomainError, ErrorCode, MemberId, StateMachine, Timestamp, TripId, TripStage,
};
use crate::domain::plan::TravelPlan;
use serde::{Deserialize, Serialize};

use super::conflict::{ConflictId, ConflictItem, ResolutionOutcome};
use super::events::TripEvent;
use super::member::Member;

/// Maximum length for a trip's destination.
pub const MAX_DESTINATION_LENGTH: usize = 200;

/// The Trip aggregate root.
///
/// # Invariants
///
/// - `destination` is 1-200 characters, non-empty
/// - `members` is ordered by join time; ids are unique
/// - `aggregated` and `conflicts` always reflect the current member
///   list; `aggregated` is `None` only while the trip has no members
/// - `plan` is only present at the recommendations stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    id: TripId,
    destination: String,
    dates: DateRange,
    members: Vec<Member>,
    aggregated: Option<AggregatedPreferences>,
    conflicts: Vec<ConflictItem>,
    stage: TripStage,
    plan: Option<TravelPlan>,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(skip, default)]
    domain_events: Vec<TripEvent>,
}

impl Trip {
    /// Creates a new trip at the preferences stage with no members.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the destination is empty or too long
    pub fn new(destination: String, dates: DateRange) -> Result<Self, DomainError> {
        let destination = Self::validate_destination(destination)?;

        let id = TripId::new();
        let now = Timestamp::now();
        let mut trip = Self {
            id,
            destination,
            dates,
            members: Vec::new(),
            aggregated: None,
            conflicts: Vec::new(),
            stage: TripStage::Preferences,
            plan: None,
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };

        trip.record_event(TripEvent::Created {
            trip_id: id,
            created_at: now,
        });

        Ok(trip)
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the trip ID.
    pub fn id(&self) -> TripId {
        self.id
    }

    /// Returns the destination.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the travel window.
    pub fn dates(&self) -> DateRange {
        self.dates
    }

    /// Returns the members in join order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Looks up a member by id.
    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == member_id)
    }

    /// Returns the derived preference summary, absent while the trip
    /// has no members.
    pub fn aggregated(&self) -> Option<&AggregatedPreferences> {
        self.aggregated.as_ref()
    }

    /// Returns the active conflict list.
    pub fn conflicts(&self) -> &[ConflictItem] {
        &self.conflicts
    }

    /// Looks up a conflict by id.
    pub fn conflict(&self, conflict_id: &ConflictId) -> Option<&ConflictItem> {
        self.conflicts.iter().find(|c| c.id() == conflict_id)
    }

    /// Number of conflicts the group has not settled yet.
    pub fn unresolved_conflict_count(&self) -> usize {
        self.conflicts.iter().filter(|c| !c.is_resolved()).count()
    }

    /// Whether every active conflict has been settled. Vacuously true
    /// when there are no conflicts.
    pub fn all_conflicts_resolved(&self) -> bool {
        self.conflicts.iter().all(|c| c.is_resolved())
    }

    /// Returns the current workflow stage.
    pub fn stage(&self) -> TripStage {
        self.stage
    }

    /// Returns the accepted plan, if one has been generated.
    pub fn plan(&self) -> Option<&TravelPlan> {
        self.plan.as_ref()
    }

    /// Returns when the trip was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the last-modified marker. Any effective mutation moves
    /// it, which lets a persistence layer detect staleness.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<TripEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Member mutations
    // ───────────────────────────────────────────────────────────────

    /// Adds a member, or replaces the member with the same id.
    ///
    /// Re-aggregates and re-detects before returning, as one atomic
    /// step. If the trip had already reached the recommendations
    /// stage, it falls back to the conflicts stage and discards any
    /// generated plan, since the group's inputs changed underneath it.
    ///
    /// Returns `true` if the member was newly added.
    pub fn upsert_member(
        &mut self,
        member: Member,
        detector: &ConflictDetector,
    ) -> Result<bool, DomainError> {
        let member_id = member.id();
        let added = match self.members.iter_mut().find(|m| m.id() == member_id) {
            Some(existing) => {
                *existing = member;
                false
            }
            None => {
                self.members.push(member);
                true
            }
        };

        self.recompute(detector)?;

        if added {
            self.record_event(TripEvent::MemberAdded {
                trip_id: self.id,
                member_id,
            });
        } else {
            self.record_event(TripEvent::MemberUpdated {
                trip_id: self.id,
                member_id,
            });
        }
        self.touch();
        Ok(added)
    }

    /// Removes a member by id, re-aggregating and re-detecting.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if no member carries that id
    pub fn remove_member(
        &mut self,
        member_id: MemberId,
        detector: &ConflictDetector,
    ) -> Result<(), DomainError> {
        let position = self
            .members
            .iter()
            .position(|m| m.id() == member_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MemberNotFound,
                    format!("No member with id {} in this trip", member_id),
                )
                .with_detail("member_id", member_id.to_string())
            })?;

        self.members.remove(position);
        self.recompute(detector)?;

        self.record_event(TripEvent::MemberRemoved {
            trip_id: self.id,
            member_id,
        });
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Conflict resolution
    // ───────────────────────────────────────────────────────────────

    /// Records the group's resolution for one conflict, leaving all
    /// others untouched.
    ///
    /// Re-submitting the identical resolution text is a no-op: the
    /// trip state, including the last-modified marker, stays as it
    /// was.
    ///
    /// # Errors
    ///
    /// - `ConflictNotFound` if no active conflict carries that id
    /// - `AlreadyResolved` if the conflict was settled with different
    ///   text
    pub fn resolve_conflict(
        &mut self,
        conflict_id: &ConflictId,
        resolution: String,
    ) -> Result<ResolutionOutcome, DomainError> {
        let conflict = self
            .conflicts
            .iter_mut()
            .find(|c| c.id() == conflict_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ConflictNotFound,
                    format!("No conflict with id '{}' in this trip", conflict_id),
                )
                .with_detail("conflict_id", conflict_id.to_string())
            })?;

        let outcome = conflict.resolve(resolution)?;
        if outcome == ResolutionOutcome::Resolved {
            self.record_event(TripEvent::ConflictResolved {
                trip_id: self.id,
                conflict_id: conflict_id.clone(),
            });
            self.touch();
        }
        Ok(outcome)
    }

    // ───────────────────────────────────────────────────────────────
    // Stage progression
    // ───────────────────────────────────────────────────────────────

    /// Moves the workflow one stage forward.
    ///
    /// Moving from preferences to conflicts is unconditional, even for
    /// a trip nobody has joined yet. Moving from conflicts to
    /// recommendations is allowed with unresolved conflicts on the
    /// books; lack of alignment is advisory, not a gate.
    ///
    /// # Errors
    ///
    /// - `InvalidStageTransition` for backward moves or skipped stages
    pub fn advance_stage(&mut self, target: TripStage) -> Result<(), DomainError> {
        let from = self.stage;
        self.stage = self.stage.transition_to(target)?;

        self.record_event(TripEvent::StageAdvanced {
            trip_id: self.id,
            from,
            to: target,
        });
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Plan handling
    // ───────────────────────────────────────────────────────────────

    /// Accepts a generated plan onto the trip.
    ///
    /// # Errors
    ///
    /// - `PlanNotReady` unless the trip is at the recommendations
    ///   stage
    pub fn attach_plan(&mut self, plan: TravelPlan) -> Result<(), DomainError> {
        if self.stage != TripStage::Recommendations {
            return Err(DomainError::new(
                ErrorCode::PlanNotReady,
                "A plan can only be attached at the recommendations stage",
            )
            .with_detail("stage", self.stage.to_string()));
        }

        self.plan = Some(plan);
        self.record_event(TripEvent::PlanAttached { trip_id: self.id });
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Private helpers
    // ───────────────────────────────────────────────────────────────

    /// Recomputes the derived state from the current member list and
    /// demotes the stage if the trip had already moved past detection.
    fn recompute(&mut self, detector: &ConflictDetector) -> Result<(), DomainError> {
        self.aggregated = if self.members.is_empty() {
            None
        } else {
            Some(PreferenceAggregator::aggregate(&self.members)?)
        };
        self.conflicts = detector.detect(&self.members, &self.conflicts);
        self.record_event(TripEvent::ConflictsRecomputed {
            trip_id: self.id,
            active_conflicts: self.conflicts.len(),
        });

        if self.stage == TripStage::Recommendations {
            self.stage = TripStage::Conflicts;
            self.plan = None;
            self.record_event(TripEvent::StageDemoted {
                trip_id: self.id,
                from: TripStage::Recommendations,
                to: TripStage::Conflicts,
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn record_event(&mut self, event: TripEvent) {
        self.domain_events.push(event);
    }

    fn validate_destination(destination: String) -> Result<String, DomainError> {
        let trimmed = destination.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "destination",
                "Destination cannot be empty",
            ));
        }
        if trimmed.len() > MAX_DESTINATION_LENGTH {
            return Err(DomainError::validation(
                "destination",
                format!(
                    "Destination must be {} characters or less",
                    MAX_DESTINATION_LENGTH
                ),
            ));
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        Accommodation, BudgetRange, CrowdTolerance, Season, TravelStyle,
    };
    use crate::domain::plan::{ItineraryDay, TravelPlan};
    use chrono::NaiveDate;

    fn dates() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 8).unwrap(),
        )
        .unwrap()
    }

    fn test_trip() -> Trip {
        Trip::new("Lisbon".to_string(), dates()).unwrap()
    }

    fn test_member(name: &str, budget: (u32, u32)) -> Member {
        Member::new(
            MemberId::new(),
            name.to_string(),
            BudgetRange::new(budget.0, budget.1).unwrap(),
            vec![Season::YearEnd],
            vec!["food".to_string()],
            CrowdTolerance::Okay,
            TravelStyle::Balanced,
            Accommodation::Hotel,
            vec![],
            vec![],
            None,
        )
        .unwrap()
    }

    fn test_plan() -> TravelPlan {
        TravelPlan::new(
            "A week in Lisbon".to_string(),
            vec![ItineraryDay {
                day: 1,
                title: "Alfama".to_string(),
                activities: vec!["Tram 28".to_string()],
            }],
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn detector() -> ConflictDetector {
        ConflictDetector::default()
    }

    // Construction tests

    #[test]
    fn new_trip_starts_at_preferences_with_nothing_derived() {
        let trip = test_trip();
        assert_eq!(trip.stage(), TripStage::Preferences);
        assert!(trip.members().is_empty());
        assert!(trip.aggregated().is_none());
        assert!(trip.conflicts().is_empty());
        assert!(trip.plan().is_none());
    }

    #[test]
    fn new_trip_records_created_event() {
        let mut trip = test_trip();
        let events = trip.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TripEvent::Created { .. }));
    }

    #[test]
    fn new_trip_trims_destination() {
        let trip = Trip::new("  Lisbon  ".to_string(), dates()).unwrap();
        assert_eq!(trip.destination(), "Lisbon");
    }

    #[test]
    fn new_trip_rejects_empty_destination() {
        assert!(Trip::new("   ".to_string(), dates()).is_err());
    }

    #[test]
    fn new_trip_rejects_too_long_destination() {
        let long = "x".repeat(MAX_DESTINATION_LENGTH + 1);
        assert!(Trip::new(long, dates()).is_err());
    }

    // Member upsert tests

    #[test]
    fn upsert_adds_new_member_and_aggregates() {
        let mut trip = test_trip();
        let added = trip.upsert_member(test_member("Mei", (500, 1500)), &detector()).unwrap();
        assert!(added);
        assert_eq!(trip.member_count(), 1);
        assert_eq!(trip.aggregated().unwrap().budget_average(), 1000);
    }

    #[test]
    fn upsert_replaces_member_with_same_id() {
        let mut trip = test_trip();
        let member = test_member("Mei", (500, 1500));
        let id = member.id();
        trip.upsert_member(member, &detector()).unwrap();

        let replacement = Member::new(
            id,
            "Mei".to_string(),
            BudgetRange::new(2000, 3000).unwrap(),
            vec![Season::YearEnd],
            vec!["food".to_string()],
            CrowdTolerance::Okay,
            TravelStyle::Balanced,
            Accommodation::Hotel,
            vec![],
            vec![],
            None,
        )
        .unwrap();
        let added = trip.upsert_member(replacement, &detector()).unwrap();

        assert!(!added);
        assert_eq!(trip.member_count(), 1);
        assert_eq!(trip.aggregated().unwrap().budget_average(), 2500);
    }

    #[test]
    fn upsert_keeps_join_order() {
        let mut trip = test_trip();
        trip.upsert_member(test_member("First", (500, 500)), &detector()).unwrap();
        trip.upsert_member(test_member("Second", (500, 500)), &detector()).unwrap();
        let first = trip.members()[0].clone();

        let replacement = Member::new(
            first.id(),
            "First again".to_string(),
            first.budget(),
            first.seasons().to_vec(),
            first.interests().to_vec(),
            first.crowd_tolerance(),
            first.travel_style(),
            first.accommodation(),
            vec![],
            vec![],
            None,
        )
        .unwrap();
        trip.upsert_member(replacement, &detector()).unwrap();

        assert_eq!(trip.members()[0].name(), "First again");
        assert_eq!(trip.members()[1].name(), "Second");
    }

    #[test]
    fn upsert_refreshes_conflicts_in_the_same_call() {
        let mut trip = test_trip();
        trip.upsert_member(test_member("A", (0, 1000)), &detector()).unwrap();
        assert!(trip.conflicts().is_empty());

        // Second member makes midpoints 500 and 2600: spread 2100/1550
        trip.upsert_member(test_member("B", (2200, 3000)), &detector()).unwrap();
        assert_eq!(trip.conflicts().len(), 1);
        assert_eq!(trip.conflicts()[0].id().as_str(), "budget");
    }

    #[test]
    fn member_edit_at_recommendations_demotes_and_discards_plan() {
        let mut trip = test_trip();
        trip.upsert_member(test_member("A", (500, 500)), &detector()).unwrap();
        trip.advance_stage(TripStage::Conflicts).unwrap();
        trip.advance_stage(TripStage::Recommendations).unwrap();
        trip.attach_plan(test_plan()).unwrap();
        assert!(trip.plan().is_some());

        trip.upsert_member(test_member("B", (600, 600)), &detector()).unwrap();

        assert_eq!(trip.stage(), TripStage::Conflicts);
        assert!(trip.plan().is_none());
    }

    #[test]
    fn member_edit_before_recommendations_keeps_stage() {
        let mut trip = test_trip();
        trip.upsert_member(test_member("A", (500, 500)), &detector()).unwrap();
        assert_eq!(trip.stage(), TripStage::Preferences);

        trip.advance_stage(TripStage::Conflicts).unwrap();
        trip.upsert_member(test_member("B", (600, 600)), &detector()).unwrap();
        assert_eq!(trip.stage(), TripStage::Conflicts);
    }

    // Member removal tests

    #[test]
    fn remove_member_recomputes_derived_state() {
        let mut trip = test_trip();
        trip.upsert_member(test_member("A", (0, 1000)), &detector()).unwrap();
        let b = test_member("B", (2200, 3000));
        let b_id = b.id();
        trip.upsert_member(b, &detector()).unwrap();
        assert_eq!(trip.conflicts().len(), 1);

        trip.remove_member(b_id, &detector()).unwrap();

        assert_eq!(trip.member_count(), 1);
        assert!(trip.conflicts().is_empty());
        assert_eq!(trip.aggregated().unwrap().budget_average(), 500);
    }

    #[test]
    fn removing_last_member_clears_aggregation() {
        let mut trip = test_trip();
        let member = test_member("A", (500, 500));
        let id = member.id();
        trip.upsert_member(member, &detector()).unwrap();

        trip.remove_member(id, &detector()).unwrap();

        assert!(trip.aggregated().is_none());
        assert!(trip.conflicts().is_empty());
    }

    #[test]
    fn remove_unknown_member_fails() {
        let mut trip = test_trip();
        let err = trip.remove_member(MemberId::new(), &detector()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MemberNotFound);
    }

    // Conflict resolution tests

    fn trip_with_budget_conflict() -> Trip {
        let mut trip = test_trip();
        trip.upsert_member(test_member("A", (0, 1000)), &detector()).unwrap();
        trip.upsert_member(test_member("B", (2200, 3000)), &detector()).unwrap();
        trip
    }

    #[test]
    fn resolve_conflict_marks_it_settled() {
        let mut trip = trip_with_budget_conflict();
        let id = trip.conflicts()[0].id().clone();

        let outcome = trip.resolve_conflict(&id, "Mix hostels and hotels".to_string()).unwrap();

        assert_eq!(outcome, ResolutionOutcome::Resolved);
        let conflict = trip.conflict(&id).unwrap();
        assert!(conflict.is_resolved());
        assert_eq!(conflict.resolution(), Some("Mix hostels and hotels"));
        assert!(trip.all_conflicts_resolved());
    }

    #[test]
    fn resolve_unknown_conflict_fails_and_changes_nothing() {
        let mut trip = trip_with_budget_conflict();
        let before = trip.conflicts().to_vec();

        let err = trip
            .resolve_conflict(&ConflictId::new("timing"), "Pick June".to_string())
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConflictNotFound);
        assert_eq!(trip.conflicts(), &before[..]);
    }

    #[test]
    fn re_resolving_with_same_text_is_noop() {
        let mut trip = trip_with_budget_conflict();
        let id = trip.conflicts()[0].id().clone();
        trip.resolve_conflict(&id, "Meet in the middle".to_string()).unwrap();
        let marker = *trip.updated_at();

        let outcome = trip.resolve_conflict(&id, "Meet in the middle".to_string()).unwrap();

        assert_eq!(outcome, ResolutionOutcome::Unchanged);
        assert_eq!(trip.updated_at(), &marker);
    }

    #[test]
    fn re_resolving_with_different_text_fails() {
        let mut trip = trip_with_budget_conflict();
        let id = trip.conflicts()[0].id().clone();
        trip.resolve_conflict(&id, "Meet in the middle".to_string()).unwrap();

        let err = trip
            .resolve_conflict(&id, "Luxury all the way".to_string())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyResolved);
    }

    #[test]
    fn resolution_moves_the_last_modified_marker() {
        let mut trip = trip_with_budget_conflict();
        let id = trip.conflicts()[0].id().clone();
        let marker = *trip.updated_at();

        trip.resolve_conflict(&id, "Meet in the middle".to_string()).unwrap();

        assert!(trip.updated_at() >= &marker);
    }

    // Stage progression tests

    #[test]
    fn advancing_with_zero_members_is_allowed() {
        let mut trip = test_trip();
        trip.advance_stage(TripStage::Conflicts).unwrap();
        assert_eq!(trip.stage(), TripStage::Conflicts);
        assert!(trip.conflicts().is_empty());
    }

    #[test]
    fn advancing_past_unresolved_conflicts_is_allowed() {
        let mut trip = trip_with_budget_conflict();
        assert_eq!(trip.unresolved_conflict_count(), 1);

        trip.advance_stage(TripStage::Conflicts).unwrap();
        trip.advance_stage(TripStage::Recommendations).unwrap();

        assert_eq!(trip.stage(), TripStage::Recommendations);
    }

    #[test]
    fn skipping_a_stage_fails() {
        let mut trip = test_trip();
        let err = trip.advance_stage(TripStage::Recommendations).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStageTransition);
        assert_eq!(trip.stage(), TripStage::Preferences);
    }

    #[test]
    fn moving_backward_fails() {
        let mut trip = test_trip();
        trip.advance_stage(TripStage::Conflicts).unwrap();
        let err = trip.advance_stage(TripStage::Preferences).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStageTransition);
    }

    // Plan tests

    #[test]
    fn attach_plan_requires_recommendations_stage() {
        let mut trip = test_trip();
        let err = trip.attach_plan(test_plan()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotReady);
        assert!(trip.plan().is_none());
    }

    #[test]
    fn attach_plan_stores_the_document() {
        let mut trip = test_trip();
        trip.advance_stage(TripStage::Conflicts).unwrap();
        trip.advance_stage(TripStage::Recommendations).unwrap();

        trip.attach_plan(test_plan()).unwrap();

        assert_eq!(trip.plan().unwrap().summary(), "A week in Lisbon");
    }

    // Event tests

    #[test]
    fn upsert_records_member_and_recompute_events() {
        let mut trip = test_trip();
        trip.take_events();

        trip.upsert_member(test_member("A", (500, 500)), &detector()).unwrap();

        let events = trip.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, TripEvent::MemberAdded { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, TripEvent::ConflictsRecomputed { .. })));
    }

    #[test]
    fn demotion_records_stage_demoted_event() {
        let mut trip = test_trip();
        trip.upsert_member(test_member("A", (500, 500)), &detector()).unwrap();
        trip.advance_stage(TripStage::Conflicts).unwrap();
        trip.advance_stage(TripStage::Recommendations).unwrap();
        trip.take_events();

        trip.upsert_member(test_member("B", (600, 600)), &detector()).unwrap();

        let events = trip.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            TripEvent::StageDemoted {
                from: TripStage::Recommendations,
                to: TripStage::Conflicts,
                ..
            }
        )));
    }

    // Serialization tests

    #[test]
    fn trip_round_trips_through_json_without_events() {
        let mut trip = trip_with_budget_conflict();
        trip.take_events();

        let json = serde_json::to_string(&trip).unwrap();
        let back: Trip = serde_json::from_str(&json).unwrap();

        assert_eq!(trip, back);
        assert_eq!(back.member_count(), 2);
        assert_eq!(back.conflicts().len(), 1);
    }
}
