//! HTTP DTOs (Data Transfer Objects) for trip endpoints.
//!
//! These types define the JSON request/response structure for the trip API.
//! They serve as the boundary between HTTP and the application layer.

use crate::domain::analysis::{AggregatedPreferences, DEFAULT_TOP_ACTIVITIES};
use crate::domain::foundation::{Accommodation, CrowdTolerance, Season, TravelStyle, TripStage};
use crate::domain::plan::TravelPlan;
use crate::domain::trip::{ConflictCategory, ConflictItem, Member, ResolutionOutcome, Severity, Trip};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripRequest {
    /// Where the group wants to go.
    pub destination: String,
    /// First night, ISO 8601 date.
    pub start_date: String,
    /// Last night, ISO 8601 date.
    pub end_date: String,
}

/// Request to add or update a member's preference sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveMemberRequest {
    /// Existing member id to update; omit to add a new member.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Lower end of the per-person budget.
    pub budget_min: u32,
    /// Upper end of the per-person budget.
    pub budget_max: u32,
    /// Preferred travel seasons.
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Free-form interest tags.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Attitude towards crowded places.
    pub crowd_tolerance: CrowdTolerance,
    /// Preferred pace of the trip.
    pub travel_style: TravelStyle,
    /// Preferred accommodation type.
    pub accommodation: Accommodation,
    /// Dietary restrictions, if any.
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Safety notes the group should respect.
    #[serde(default)]
    pub safety_flags: Vec<String>,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
}

/// Request to record a conflict resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveConflictRequest {
    /// How the group settled the disagreement.
    pub resolution: String,
}

/// Request to advance the trip workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceStageRequest {
    /// The stage to move to. Must be the immediate successor.
    pub target: TripStage,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Full trip details.
#[derive(Debug, Clone, Serialize)]
pub struct TripResponse {
    /// Trip ID.
    pub id: String,
    /// Destination name.
    pub destination: String,
    /// First night (ISO 8601 date).
    pub start_date: String,
    /// Last night (ISO 8601 date).
    pub end_date: String,
    /// Number of nights.
    pub nights: u32,
    /// Current workflow stage.
    pub stage: TripStage,
    /// Everyone who filled in preferences.
    pub members: Vec<MemberResponse>,
    /// Group-level preference profile, absent while the trip is empty.
    pub aggregated: Option<AggregatedResponse>,
    /// Currently detected conflicts.
    pub conflicts: Vec<ConflictResponse>,
    /// Conflicts still awaiting a resolution.
    pub unresolved_conflicts: usize,
    /// Generated travel plan, if one has been accepted.
    pub plan: Option<PlanResponse>,
    /// When the trip was created (ISO 8601).
    pub created_at: String,
    /// When the trip was last modified (ISO 8601).
    pub updated_at: String,
}

impl From<&Trip> for TripResponse {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id().to_string(),
            destination: trip.destination().to_string(),
            start_date: trip.dates().start().to_string(),
            end_date: trip.dates().end().to_string(),
            nights: trip.dates().nights(),
            stage: trip.stage(),
            members: trip.members().iter().map(MemberResponse::from).collect(),
            aggregated: trip.aggregated().map(AggregatedResponse::from),
            conflicts: trip.conflicts().iter().map(ConflictResponse::from).collect(),
            unresolved_conflicts: trip.unresolved_conflict_count(),
            plan: trip.plan().map(PlanResponse::from),
            created_at: trip.created_at().to_rfc3339(),
            updated_at: trip.updated_at().to_rfc3339(),
        }
    }
}

/// One member's preference sheet.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    /// Member ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lower end of the per-person budget.
    pub budget_min: u32,
    /// Upper end of the per-person budget.
    pub budget_max: u32,
    /// Preferred travel seasons.
    pub seasons: Vec<Season>,
    /// Interest tags.
    pub interests: Vec<String>,
    /// Attitude towards crowded places.
    pub crowd_tolerance: CrowdTolerance,
    /// Preferred pace.
    pub travel_style: TravelStyle,
    /// Preferred accommodation type.
    pub accommodation: Accommodation,
    /// Dietary restrictions.
    pub dietary_restrictions: Vec<String>,
    /// Safety notes.
    pub safety_flags: Vec<String>,
    /// Avatar image reference.
    pub avatar: Option<String>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().to_string(),
            name: member.name().to_string(),
            budget_min: member.budget().min(),
            budget_max: member.budget().max(),
            seasons: member.seasons().to_vec(),
            interests: member.interests().to_vec(),
            crowd_tolerance: member.crowd_tolerance(),
            travel_style: member.travel_style(),
            accommodation: member.accommodation(),
            dietary_restrictions: member.dietary_restrictions().to_vec(),
            safety_flags: member.safety_flags().to_vec(),
            avatar: member.avatar().map(String::from),
        }
    }
}

/// Group-level preference profile.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedResponse {
    /// Members included in the aggregation.
    pub member_count: usize,
    /// Average of the members' budget midpoints.
    pub budget_average: u32,
    /// Most popular interest tags, most popular first.
    pub top_activities: Vec<ActivityCountResponse>,
    /// Season popularity, most popular first.
    pub seasons: Vec<SeasonCountResponse>,
    /// Crowd-tolerance distribution.
    pub crowd: CrowdDistributionResponse,
}

impl From<&AggregatedPreferences> for AggregatedResponse {
    fn from(aggregated: &AggregatedPreferences) -> Self {
        Self {
            member_count: aggregated.member_count(),
            budget_average: aggregated.budget_average(),
            top_activities: aggregated
                .top_activities(DEFAULT_TOP_ACTIVITIES)
                .iter()
                .map(|a| ActivityCountResponse {
                    tag: a.tag.clone(),
                    count: a.count,
                })
                .collect(),
            seasons: aggregated
                .season_counts()
                .iter()
                .map(|s| SeasonCountResponse {
                    season: s.season,
                    count: s.count,
                })
                .collect(),
            crowd: CrowdDistributionResponse {
                avoid: aggregated.crowd_distribution().avoid,
                okay: aggregated.crowd_distribution().okay,
                no_preference: aggregated.crowd_distribution().no_preference,
            },
        }
    }
}

/// One interest tag with its popularity.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityCountResponse {
    pub tag: String,
    pub count: usize,
}

/// One season with its popularity.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonCountResponse {
    pub season: Season,
    pub count: usize,
}

/// Crowd-tolerance counts across the group.
#[derive(Debug, Clone, Serialize)]
pub struct CrowdDistributionResponse {
    pub avoid: usize,
    pub okay: usize,
    pub no_preference: usize,
}

/// One detected conflict.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictResponse {
    /// Stable conflict id (the category slug).
    pub id: String,
    /// The preference dimension in disagreement.
    pub category: ConflictCategory,
    /// How serious the disagreement is.
    pub severity: Severity,
    /// Human-readable description.
    pub description: String,
    /// Whether the group has settled it.
    pub resolved: bool,
    /// The agreed resolution, once settled.
    pub resolution: Option<String>,
}

impl From<&ConflictItem> for ConflictResponse {
    fn from(conflict: &ConflictItem) -> Self {
        Self {
            id: conflict.id().to_string(),
            category: conflict.category(),
            severity: conflict.severity(),
            description: conflict.description().to_string(),
            resolved: conflict.is_resolved(),
            resolution: conflict.resolution().map(String::from),
        }
    }
}

/// Accepted travel plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    /// Prose summary of the trip.
    pub summary: String,
    /// Day-by-day itinerary.
    pub itinerary: Vec<ItineraryDayResponse>,
    /// Free-form recommendations.
    pub recommendations: Vec<String>,
    /// Estimated per-person budget breakdown.
    pub budget_breakdown: Vec<BudgetLineResponse>,
    /// When the plan was generated (ISO 8601).
    pub generated_at: String,
}

impl From<&TravelPlan> for PlanResponse {
    fn from(plan: &TravelPlan) -> Self {
        Self {
            summary: plan.summary().to_string(),
            itinerary: plan
                .itinerary()
                .iter()
                .map(|day| ItineraryDayResponse {
                    day: day.day,
                    title: day.title.clone(),
                    activities: day.activities.clone(),
                })
                .collect(),
            recommendations: plan.recommendations().to_vec(),
            budget_breakdown: plan
                .budget_breakdown()
                .iter()
                .map(|line| BudgetLineResponse {
                    label: line.label.clone(),
                    amount: line.amount,
                })
                .collect(),
            generated_at: plan.generated_at().to_rfc3339(),
        }
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryDayResponse {
    pub day: u32,
    pub title: String,
    pub activities: Vec<String>,
}

/// One line of the budget estimate.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetLineResponse {
    pub label: String,
    pub amount: u32,
}

/// Summary for the trip overview list.
#[derive(Debug, Clone, Serialize)]
pub struct TripSummaryResponse {
    /// Trip ID.
    pub id: String,
    /// Destination name.
    pub destination: String,
    /// First night (ISO 8601 date).
    pub start_date: String,
    /// Last night (ISO 8601 date).
    pub end_date: String,
    /// Current workflow stage.
    pub stage: TripStage,
    /// Number of members who joined.
    pub member_count: usize,
    /// Conflicts still awaiting a resolution.
    pub unresolved_conflicts: usize,
    /// When the trip was created (ISO 8601).
    pub created_at: String,
}

impl From<&Trip> for TripSummaryResponse {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id().to_string(),
            destination: trip.destination().to_string(),
            start_date: trip.dates().start().to_string(),
            end_date: trip.dates().end().to_string(),
            stage: trip.stage(),
            member_count: trip.member_count(),
            unresolved_conflicts: trip.unresolved_conflict_count(),
            created_at: trip.created_at().to_rfc3339(),
        }
    }
}

/// Response for a member save.
#[derive(Debug, Clone, Serialize)]
pub struct SaveMemberResponse {
    /// Id of the saved member.
    pub member_id: String,
    /// True if the member was newly added.
    pub created: bool,
    /// The trip with refreshed aggregation and conflicts.
    pub trip: TripResponse,
}

/// Response for a conflict resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveConflictResponse {
    /// "resolved" or "unchanged".
    pub outcome: String,
    /// The trip after the resolution.
    pub trip: TripResponse,
}

impl ResolveConflictResponse {
    pub fn new(outcome: ResolutionOutcome, trip: TripResponse) -> Self {
        let outcome = match outcome {
            ResolutionOutcome::Resolved => "resolved",
            ResolutionOutcome::Unchanged => "unchanged",
        };
        Self {
            outcome: outcome.to_string(),
            trip,
        }
    }
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
