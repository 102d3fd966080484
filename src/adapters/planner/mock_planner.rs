//! Mock plan generator for testing.
//!
//! Configurable to return scripted drafts, simulate delays, or inject
//! errors, so tests and local development never call a real provider.
//!
//! # Example
//!
//! ```ignore
//! let planner = MockPlanGenerator::new()
//!     .with_draft(MockPlanGenerator::sample_draft())
//!     .with_delay(Duration::from_millis(100));
//!
//! let draft = planner.generate(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::plan::{BudgetLine, ItineraryDay, PlanRequest};
use crate::ports::{GeneratorInfo, PlanDraft, PlanGenerationError, PlanGenerator};

/// Mock plan generator for testing.
#[derive(Debug, Clone)]
pub struct MockPlanGenerator {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockPlanResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<PlanRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockPlanResponse {
    /// Return a draft.
    Success(PlanDraft),
    /// Return an error.
    Error(MockPlanError),
}

/// Mock error types for testing error handling.
///
/// Mirrors [`PlanGenerationError`] with `Clone` so scripted responses
/// can live in the queue.
#[derive(Debug, Clone)]
pub enum MockPlanError {
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate network error.
    Network { message: String },
    /// Simulate an unparseable reply.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockPlanError> for PlanGenerationError {
    fn from(err: MockPlanError) -> Self {
        match err {
            MockPlanError::Unavailable { message } => PlanGenerationError::unavailable(message),
            MockPlanError::AuthenticationFailed => PlanGenerationError::AuthenticationFailed,
            MockPlanError::RateLimited { retry_after_secs } => {
                PlanGenerationError::rate_limited(retry_after_secs)
            }
            MockPlanError::Network { message } => PlanGenerationError::network(message),
            MockPlanError::Parse { message } => PlanGenerationError::parse(message),
            MockPlanError::Timeout { timeout_secs } => {
                PlanGenerationError::Timeout { timeout_secs }
            }
        }
    }
}

impl Default for MockPlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlanGenerator {
    /// Creates a new mock generator with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A small well-formed draft, also used when the queue runs dry.
    pub fn sample_draft() -> PlanDraft {
        PlanDraft {
            summary: "A relaxed week balancing food, culture, and downtime.".to_string(),
            itinerary: vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrival and old town".to_string(),
                    activities: vec![
                        "Check in".to_string(),
                        "Evening walk through the old town".to_string(),
                    ],
                },
                ItineraryDay {
                    day: 2,
                    title: "Markets and museums".to_string(),
                    activities: vec!["Morning market".to_string(), "City museum".to_string()],
                },
            ],
            recommendations: vec!["Book museum tickets ahead".to_string()],
            budget_breakdown: vec![
                BudgetLine {
                    label: "Lodging".to_string(),
                    amount: 450,
                },
                BudgetLine {
                    label: "Food".to_string(),
                    amount: 280,
                },
            ],
        }
    }

    /// Adds a draft to the queue.
    pub fn with_draft(self, draft: PlanDraft) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockPlanResponse::Success(draft));
        drop(responses);
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockPlanError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockPlanResponse::Error(error));
        drop(responses);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<PlanRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next response or the sample draft.
    fn next_response(&self) -> MockPlanResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockPlanResponse::Success(Self::sample_draft()))
    }
}

#[async_trait]
impl PlanGenerator for MockPlanGenerator {
    async fn generate(&self, request: PlanRequest) -> Result<PlanDraft, PlanGenerationError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockPlanResponse::Success(draft) => Ok(draft),
            MockPlanResponse::Error(err) => Err(err.into()),
        }
    }

    fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo::new("mock", "mock-planner-1")
    }
}
