//! SaveMemberHandler - Command handler for adding or editing a member.
//!
//! A single upsert covers both joining a trip and revising an existing
//! preference sheet; the aggregate re-runs aggregation and detection
//! either way.

use std::sync::Arc;

use crate::domain::analysis::ConflictDetector;
use crate::domain::foundation::{
    Accommodation, BudgetRange, CrowdTolerance, DomainError, MemberId, Season, TravelStyle, TripId,
};
use crate::domain::trip::{Member, Trip};
use crate::ports::TripRepository;

/// Command to add a member or replace an existing member's preferences.
#[derive(Debug, Clone)]
pub struct SaveMemberCommand {
    /// Trip to modify.
    pub trip_id: TripId,
    /// Existing member to update, or `None` to add a new one.
    pub member_id: Option<MemberId>,
    /// Display name.
    pub name: String,
    /// Per-person budget range.
    pub budget: BudgetRange,
    /// Preferred travel seasons.
    pub seasons: Vec<Season>,
    /// Free-form interest tags.
    pub interests: Vec<String>,
    /// Attitude towards crowded places.
    pub crowd_tolerance: CrowdTolerance,
    /// Preferred pace of the trip.
    pub travel_style: TravelStyle,
    /// Preferred accommodation type.
    pub accommodation: Accommodation,
    /// Dietary restrictions, if any.
    pub dietary_restrictions: Vec<String>,
    /// Safety notes the group should respect.
    pub safety_flags: Vec<String>,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
}

/// Result of a successful member save.
#[derive(Debug, Clone)]
pub struct SaveMemberResult {
    /// The trip with refreshed aggregation and conflicts.
    pub trip: Trip,
    /// Id of the saved member.
    pub member_id: MemberId,
    /// True if the member was newly added.
    pub created: bool,
}

/// Error type for member saves.
#[derive(Debug, Clone)]
pub enum SaveMemberError {
    /// Trip not found.
    TripNotFound(TripId),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for SaveMemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveMemberError::TripNotFound(id) => write!(f, "Trip not found: {}", id),
            SaveMemberError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SaveMemberError {}

impl From<DomainError> for SaveMemberError {
    fn from(err: DomainError) -> Self {
        SaveMemberError::Domain(err)
    }
}

/// Handler for member upserts.
pub struct SaveMemberHandler {
    repository: Arc<dyn TripRepository>,
    detector: Arc<ConflictDetector>,
}

impl SaveMemberHandler {
    pub fn new(repository: Arc<dyn TripRepository>, detector: Arc<ConflictDetector>) -> Self {
        Self {
            repository,
            detector,
        }
    }

    pub async fn handle(
        &self,
        cmd: SaveMemberCommand,
    ) -> Result<SaveMemberResult, SaveMemberError> {
        // 1. Load the trip
        let mut trip = self
            .repository
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(SaveMemberError::TripNotFound(cmd.trip_id))?;

        // 2. Assemble the member (fresh id when none was given)
        let member_id = cmd.member_id.unwrap_or_else(MemberId::new);
        let member = Member::new(
            member_id,
            cmd.name,
            cmd.budget,
            cmd.seasons,
            cmd.interests,
            cmd.crowd_tolerance,
            cmd.travel_style,
            cmd.accommodation,
            cmd.dietary_restrictions,
            cmd.safety_flags,
            cmd.avatar,
        )?;

        // 3. Add or replace, re-running aggregation and detection
        let created = trip.upsert_member(member, &self.detector)?;

        // 4. Drain and log domain events
        for event in trip.take_events() {
            tracing::debug!(?event, "Domain event");
        }

        // 5. Persist
        self.repository.update(&trip).await?;

        Ok(SaveMemberResult {
            trip,
            member_id,
            created,
        })
    }
}
