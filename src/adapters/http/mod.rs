//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod trip;

// Re-export key types for convenience
pub use trip::trip_router;
pub use trip::TripAppState;
