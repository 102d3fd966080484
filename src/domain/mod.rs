//! Domain layer: aggregates, value objects, and pure planning logic.

pub mod analysis;
pub mod foundation;
pub mod plan;
pub mod trip;
