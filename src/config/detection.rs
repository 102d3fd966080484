//! Conflict detection configuration

use serde::Deserialize;

use crate::domain::analysis::DetectionThresholds;

use super::error::ValidationError;

/// Conflict detection configuration
///
/// Wraps the domain thresholds so deployments can tune individual
/// rules, e.g. `TRIP_ACCORD__DETECTION__THRESHOLDS__BUDGET_SPREAD_HIGH=0.4`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionConfig {
    /// Rule thresholds; unset values keep the shipped defaults
    #[serde(default)]
    pub thresholds: DetectionThresholds,
}

impl DetectionConfig {
    /// Validate detection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds
            .validate()
            .map_err(|e| ValidationError::InvalidThresholds(e.message))
    }
}
