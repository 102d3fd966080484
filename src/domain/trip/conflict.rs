//! Conflict items and their resolution lifecycle.

use crate::domain::foundation::{DomainError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The preference dimension a conflict was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictCategory {
    Budget,
    Timing,
    Pacing,
    Accommodation,
    Dietary,
    Activity,
}

impl ConflictCategory {
    /// Stable slug used as the conflict identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            ConflictCategory::Budget => "budget",
            ConflictCategory::Timing => "timing",
            ConflictCategory::Pacing => "pacing",
            ConflictCategory::Accommodation => "accommodation",
            ConflictCategory::Dietary => "dietary",
            ConflictCategory::Activity => "activity",
        }
    }
}

impl fmt::Display for ConflictCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// How serious a detected disagreement is.
///
/// Variant order matters: later variants are more severe, so the
/// derived `Ord` can be used to sort or compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Identifier for a conflict.
///
/// Derived deterministically from the rule category so that re-running
/// detection after a member update lines up with the previous run. Ids
/// parsed from request paths may name a category with no active
/// conflict; lookup then simply misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictId(String);

impl ConflictId {
    /// Creates an id from an arbitrary string, as received from a caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives the canonical id for a category.
    pub fn from_category(category: ConflictCategory) -> Self {
        Self(category.slug().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The conflict was newly resolved.
    Resolved,
    /// The same resolution was re-submitted; nothing changed.
    Unchanged,
}

/// One detected disagreement among the group's preferences.
///
/// Conflicts are created by detection and mutated only through
/// [`ConflictItem::resolve`]. A resolved conflict keeps its resolution
/// text so the record of how it was settled stays inspectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictItem {
    id: ConflictId,
    category: ConflictCategory,
    severity: Severity,
    description: String,
    resolved: bool,
    resolution: Option<String>,
}

impl ConflictItem {
    /// Creates a fresh, unresolved conflict for a category.
    pub fn new(category: ConflictCategory, severity: Severity, description: String) -> Self {
        Self {
            id: ConflictId::from_category(category),
            category,
            severity,
            description,
            resolved: false,
            resolution: None,
        }
    }

    /// Reconstructs a conflict with explicit resolution state.
    ///
    /// Used when reconciling a fresh detection run against an earlier
    /// one, to carry a still-valid resolution forward.
    pub fn reconstitute(
        category: ConflictCategory,
        severity: Severity,
        description: String,
        resolved: bool,
        resolution: Option<String>,
    ) -> Self {
        Self {
            id: ConflictId::from_category(category),
            category,
            severity,
            description,
            resolved,
            resolution,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the conflict ID.
    pub fn id(&self) -> &ConflictId {
        &self.id
    }

    /// Returns the category.
    pub fn category(&self) -> ConflictCategory {
        self.category
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the group has settled this conflict.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns the chosen resolution, if resolved.
    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Records the group's resolution for this conflict.
    ///
    /// Re-submitting the identical resolution text is a no-op and
    /// reports [`ResolutionOutcome::Unchanged`]. Text is trimmed
    /// before comparison.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the resolution text is blank
    /// - `AlreadyResolved` if the conflict was resolved with different
    ///   text
    pub fn resolve(&mut self, resolution: String) -> Result<ResolutionOutcome, DomainError> {
        let resolution = resolution.trim().to_string();
        if resolution.is_empty() {
            return Err(DomainError::validation(
                "resolution",
                "Resolution text cannot be empty",
            ));
        }

        if self.resolved {
            if self.resolution.as_deref() == Some(resolution.as_str()) {
                return Ok(ResolutionOutcome::Unchanged);
            }
            return Err(DomainError::new(
                ErrorCode::AlreadyResolved,
                format!("Conflict '{}' is already resolved", self.id),
            )
            .with_detail("conflict_id", self.id.to_string()));
        }

        self.resolved = true;
        self.resolution = Some(resolution);
        Ok(ResolutionOutcome::Resolved)
    }
}
