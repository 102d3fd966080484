//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum handlers exposing the trip workflow as a REST API
//! - `planner` - Plan generator implementations (Anthropic, mock)
//! - `storage` - Trip repository implementations (in-memory, JSON files)

pub mod http;
pub mod planner;
pub mod storage;

pub use planner::{AnthropicPlanner, AnthropicPlannerConfig, MockPlanGenerator};
pub use storage::{InMemoryTripRepository, JsonFileTripRepository};
