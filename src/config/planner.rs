//! Plan generator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Plan generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Which generator to wire in
    #[serde(default)]
    pub provider: PlannerProvider,

    /// Model override; the adapter picks a default when unset
    pub model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on retryable failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// Plan generator provider type
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlannerProvider {
    #[default]
    Anthropic,
    /// Scripted generator, for tests and offline demos
    Mock,
}

impl PlannerConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an Anthropic key is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validate planner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == PlannerProvider::Anthropic && !self.has_anthropic() {
            return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            provider: PlannerProvider::default(),
            model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}
