//! Plan generator port - interface to the itinerary generation service.
//!
//! Abstracts the outbound call that turns a trip's preference profile
//! into a drafted itinerary, so the workflow does not couple to any
//! one provider.
//!
//! # Design
//!
//! - The port returns an unvalidated [`PlanDraft`]; shape validation
//!   (a plan must carry a non-empty itinerary) happens in the core,
//!   so a provider cannot smuggle an empty plan past it
//! - Transport and parse failures are [`PlanGenerationError`], a
//!   different animal from a well-formed but unacceptable plan

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::plan::{BudgetLine, ItineraryDay, PlanRequest};

/// Port for the external plan-generation collaborator.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Request a drafted plan for the given trip profile.
    ///
    /// At most one generation is in flight per trip; the caller waits
    /// for a result or failure before touching trip state again.
    async fn generate(&self, request: PlanRequest) -> Result<PlanDraft, PlanGenerationError>;

    /// Get generator information (provider name, model).
    fn generator_info(&self) -> GeneratorInfo;
}

/// Raw plan document as returned by a provider, before the core has
/// validated its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Prose summary of the proposed trip.
    pub summary: String,
    /// Day-by-day itinerary. May be empty in a malformed response;
    /// the core rejects such drafts.
    pub itinerary: Vec<ItineraryDay>,
    /// Free-form recommendations for the group.
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Estimated per-person budget breakdown.
    #[serde(default)]
    pub budget_breakdown: Vec<BudgetLine>,
}

/// Generator identification for logs and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorInfo {
    /// Provider name, e.g. "anthropic" or "mock".
    pub name: String,
    /// Model identifier the provider was configured with.
    pub model: String,
}

impl GeneratorInfo {
    /// Creates new generator info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Failures while obtaining a plan from the provider.
#[derive(Debug, thiserror::Error)]
pub enum PlanGenerationError {
    /// Provider is unavailable.
    #[error("generator unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response into a plan draft.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl PlanGenerationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlanGenerationError::Unavailable { .. }
                | PlanGenerationError::RateLimited { .. }
                | PlanGenerationError::Network(_)
                | PlanGenerationError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_generator_is_object_safe() {
        fn _accepts_dyn(_generator: &dyn PlanGenerator) {}
    }

    #[test]
    fn retryable_classification() {
        assert!(PlanGenerationError::unavailable("down").is_retryable());
        assert!(PlanGenerationError::rate_limited(30).is_retryable());
        assert!(PlanGenerationError::network("reset").is_retryable());
        assert!(PlanGenerationError::Timeout { timeout_secs: 30 }.is_retryable());

        assert!(!PlanGenerationError::AuthenticationFailed.is_retryable());
        assert!(!PlanGenerationError::parse("bad json").is_retryable());
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            PlanGenerationError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            PlanGenerationError::parse("missing itinerary").to_string(),
            "parse error: missing itinerary"
        );
    }

    #[test]
    fn draft_deserializes_with_missing_optional_sections() {
        let draft: PlanDraft = serde_json::from_str(
            r#"{"summary": "A trip", "itinerary": [{"day": 1, "title": "Arrive", "activities": []}]}"#,
        )
        .unwrap();
        assert!(draft.recommendations.is_empty());
        assert!(draft.budget_breakdown.is_empty());
    }
}
