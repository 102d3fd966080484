//! Trip planning workflow stages.

use super::errors::{DomainError, ErrorCode};
use super::state_machine::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stage a trip is at in the planning workflow.
///
/// The workflow is linear: preferences are collected first, conflicts
/// are surfaced and worked through next, and recommendations close it
/// out. Advancing is one step at a time and never skips a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStage {
    Preferences,
    Conflicts,
    Recommendations,
}

impl TripStage {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TripStage::Preferences => "Preferences",
            TripStage::Conflicts => "Conflicts",
            TripStage::Recommendations => "Recommendations",
        }
    }
}

impl fmt::Display for TripStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl StateMachine for TripStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (TripStage::Preferences, TripStage::Conflicts)
                | (TripStage::Conflicts, TripStage::Recommendations)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            TripStage::Preferences => vec![TripStage::Conflicts],
            TripStage::Conflicts => vec![TripStage::Recommendations],
            TripStage::Recommendations => vec![],
        }
    }

    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStageTransition,
                format!("Cannot move from {} to {}", self, target),
            )
            .with_detail("from", self.to_string())
            .with_detail("to", target.to_string()))
        }
    }
}
