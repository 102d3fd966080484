//! Anthropic Planner - Implementation of PlanGenerator for Anthropic's Claude API.
//!
//! Renders the group's combined preferences into a prompt, asks the model for a
//! strictly-JSON travel plan, and parses the reply into a [`PlanDraft`].
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicPlannerConfig::new(api_key)
//!     .with_model("claude-sonnet-4-20250514")
//!     .with_base_url("https://api.anthropic.com");
//!
//! let planner = AnthropicPlanner::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::plan::{PlanRequest, TravelerProfile};
use crate::ports::{GeneratorInfo, PlanDraft, PlanGenerationError, PlanGenerator};

/// Configuration for the Anthropic planner.
#[derive(Debug, Clone)]
pub struct AnthropicPlannerConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Base URL for the API (default: https://api.anthropic.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// Completion budget for the plan document.
    pub max_tokens: u32,
}

impl AnthropicPlannerConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
            max_tokens: 4096,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = "\
You are a travel planner for small groups. You receive the destination, travel \
dates, and every traveler's preferences, and you produce one plan the whole \
group can live with. Favour choices that satisfy the most restrictive member \
(dietary needs and safety notes are hard constraints, budgets are soft).

Respond with a single JSON object and nothing else. No markdown, no prose \
around it. The object must have exactly these fields:
{
  \"summary\": \"two or three sentences describing the trip\",
  \"itinerary\": [{\"day\": 1, \"title\": \"...\", \"activities\": [\"...\"]}],
  \"recommendations\": [\"...\"],
  \"budget_breakdown\": [{\"label\": \"...\", \"amount\": 0}]
}
The itinerary must cover every night of the stay.";

/// Anthropic API planner implementation.
pub struct AnthropicPlanner {
    config: AnthropicPlannerConfig,
    client: Client,
}

impl AnthropicPlanner {
    /// Creates a new Anthropic planner with the given configuration.
    pub fn new(config: AnthropicPlannerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Renders the plan request as the user message.
    fn build_user_prompt(request: &PlanRequest) -> String {
        let mut prompt = format!(
            "Destination: {}\nDates: {} ({} nights)\nGroup size: {}\n\nTravelers:\n",
            request.destination,
            request.dates,
            request.dates.nights(),
            request.travelers.len(),
        );

        for traveler in &request.travelers {
            prompt.push_str(&Self::render_traveler(traveler));
        }

        prompt.push_str("\nProduce the JSON plan now.");
        prompt
    }

    fn render_traveler(traveler: &TravelerProfile) -> String {
        let mut line = format!(
            "- {}: budget {} per person, {} pace, crowds: {}",
            traveler.name, traveler.budget, traveler.travel_style, traveler.crowd_tolerance,
        );

        if !traveler.preferred_seasons.is_empty() {
            let seasons: Vec<&str> = traveler
                .preferred_seasons
                .iter()
                .map(|s| s.label())
                .collect();
            line.push_str(&format!("; prefers {}", seasons.join(", ")));
        }
        if !traveler.interests.is_empty() {
            line.push_str(&format!("; interests: {}", traveler.interests.join(", ")));
        }
        if !traveler.dietary_restrictions.is_empty() {
            line.push_str(&format!(
                "; dietary: {}",
                traveler.dietary_restrictions.join(", ")
            ));
        }
        if !traveler.safety_flags.is_empty() {
            line.push_str(&format!("; safety: {}", traveler.safety_flags.join(", ")));
        }

        line.push('\n');
        line
    }

    /// Sends a request and handles transport-level failures.
    async fn send_request(&self, request: &PlanRequest) -> Result<Response, PlanGenerationError> {
        let anthropic_request = AnthropicRequest {
            model: self.config.model.clone(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: Self::build_user_prompt(request),
            }],
            system: SYSTEM_PROMPT.to_string(),
            max_tokens: self.config.max_tokens,
        };

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlanGenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    PlanGenerationError::network(format!("Connection failed: {}", e))
                } else {
                    PlanGenerationError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, PlanGenerationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(PlanGenerationError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(PlanGenerationError::rate_limited(retry_after))
            }
            500..=599 => Err(PlanGenerationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(PlanGenerationError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        60 // Default retry window for Anthropic
    }

    /// Extracts the plan draft from a successful response.
    async fn parse_response(&self, response: Response) -> Result<PlanDraft, PlanGenerationError> {
        let response = self.handle_response_status(response).await?;

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| PlanGenerationError::parse(format!("Failed to parse response: {}", e)))?;

        let content = anthropic_response
            .content
            .into_iter()
            .filter_map(|block| {
                if block.block_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        parse_plan_draft(&content)
    }
}

#[async_trait]
impl PlanGenerator for AnthropicPlanner {
    async fn generate(&self, request: PlanRequest) -> Result<PlanDraft, PlanGenerationError> {
        let mut last_error = PlanGenerationError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(&request).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(draft) => return Ok(draft),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo::new("anthropic", &self.config.model)
    }
}

/// Parses the model's reply into a plan draft.
///
/// Tolerates a markdown code fence around the JSON; models add one
/// despite instructions often enough that stripping it is cheaper
/// than a retry.
fn parse_plan_draft(content: &str) -> Result<PlanDraft, PlanGenerationError> {
    let json = strip_code_fence(content);
    serde_json::from_str(json)
        .map_err(|e| PlanGenerationError::parse(format!("Malformed plan document: {}", e)))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    opened.strip_suffix("```").unwrap_or(opened).trim()
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    system: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}
