//! Trip member entity.

use crate::domain::foundation::{
    Accommodation, BudgetRange, CrowdTolerance, DomainError, MemberId, Season, TravelStyle,
};
use serde::{Deserialize, Serialize};

/// Maximum length for a member's display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum number of interest tags a member can carry.
pub const MAX_INTERESTS: usize = 20;

/// One participant's travel preferences within a trip.
///
/// Members are owned exclusively by the trip they belong to. A member
/// is immutable once created; updates go through the trip's upsert
/// operation, which replaces the member wholesale and recomputes the
/// derived state.
///
/// # Invariants
///
/// - `name` is 1-100 characters after trimming
/// - `seasons`, `interests`, and `dietary_restrictions` contain no
///   duplicates and preserve first-seen order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    budget: BudgetRange,
    seasons: Vec<Season>,
    interests: Vec<String>,
    crowd_tolerance: CrowdTolerance,
    travel_style: TravelStyle,
    accommodation: Accommodation,
    dietary_restrictions: Vec<String>,
    safety_flags: Vec<String>,
    avatar: Option<String>,
}

impl Member {
    /// Creates a new member, normalizing the list fields.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty or too long, or if
    ///   more than [`MAX_INTERESTS`] interest tags are given
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: MemberId,
        name: String,
        budget: BudgetRange,
        seasons: Vec<Season>,
        interests: Vec<String>,
        crowd_tolerance: CrowdTolerance,
        travel_style: TravelStyle,
        accommodation: Accommodation,
        dietary_restrictions: Vec<String>,
        safety_flags: Vec<String>,
        avatar: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        let interests = dedupe_preserving_order(normalize_tags(interests));
        if interests.len() > MAX_INTERESTS {
            return Err(DomainError::validation(
                "interests",
                format!("At most {} interest tags are allowed", MAX_INTERESTS),
            ));
        }

        Ok(Self {
            id,
            name,
            budget,
            seasons: dedupe_preserving_order(seasons),
            interests,
            crowd_tolerance,
            travel_style,
            accommodation,
            dietary_restrictions: dedupe_preserving_order(normalize_tags(dietary_restrictions)),
            safety_flags: dedupe_preserving_order(normalize_tags(safety_flags)),
            avatar,
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the member ID.
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the budget range.
    pub fn budget(&self) -> BudgetRange {
        self.budget
    }

    /// Returns the preferred travel seasons.
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Returns the interest tags.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Returns the crowd tolerance.
    pub fn crowd_tolerance(&self) -> CrowdTolerance {
        self.crowd_tolerance
    }

    /// Returns the travel pacing style.
    pub fn travel_style(&self) -> TravelStyle {
        self.travel_style
    }

    /// Returns the accommodation preference.
    pub fn accommodation(&self) -> Accommodation {
        self.accommodation
    }

    /// Returns the dietary restrictions.
    pub fn dietary_restrictions(&self) -> &[String] {
        &self.dietary_restrictions
    }

    /// Returns the safety flags to surface to the planner.
    pub fn safety_flags(&self) -> &[String] {
        &self.safety_flags
    }

    /// Returns the avatar reference, if any.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Whether this member has any dietary restrictions.
    pub fn has_dietary_restrictions(&self) -> bool {
        !self.dietary_restrictions.is_empty()
    }

    // ───────────────────────────────────────────────────────────────
    // Private helpers
    // ───────────────────────────────────────────────────────────────

    fn validate_name(name: String) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Name must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Trims tags and drops the ones that end up empty.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Removes duplicates while keeping the first occurrence of each value.
fn dedupe_preserving_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
