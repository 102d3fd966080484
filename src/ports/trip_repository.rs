//! Trip repository port.
//!
//! Defines the contract for persisting and retrieving Trip aggregates.
//! The core only needs this seam; whether trips live in memory or on
//! disk is the adapter's business.

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::Trip;
use async_trait::async_trait;

/// Repository port for Trip aggregate persistence.
///
/// Implementations must store the trip's derived state (aggregation
/// and conflicts) together with its members, so a loaded trip is
/// immediately consistent without a recompute.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Save a new trip.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, trip: &Trip) -> Result<(), DomainError>;

    /// Update an existing trip.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if the trip doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, trip: &Trip) -> Result<(), DomainError>;

    /// Find a trip by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError>;

    /// Check if a trip exists.
    async fn exists(&self, id: &TripId) -> Result<bool, DomainError>;

    /// List all trips, newest first.
    async fn list(&self) -> Result<Vec<Trip>, DomainError>;

    /// Delete a trip, ending its planning session.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if the trip doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &TripId) -> Result<(), DomainError>;
}
