//! Plan generator adapters.
//!
//! - [`AnthropicPlanner`]: production adapter calling the Anthropic API
//! - [`MockPlanGenerator`]: scripted adapter for tests and local development

mod anthropic_planner;
mod mock_planner;

pub use anthropic_planner::{AnthropicPlanner, AnthropicPlannerConfig};
pub use mock_planner::{MockPlanError, MockPlanGenerator, MockPlanResponse};
