//! In-memory trip repository adapter.
//!
//! Keeps trips in a shared map. The default for development and tests,
//! where planning sessions are allowed to vanish with the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, TripId};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// In-memory storage for trips.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripRepository {
    trips: Arc<RwLock<HashMap<TripId, Trip>>>,
}

impl InMemoryTripRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored trips.
    pub async fn count(&self) -> usize {
        self.trips.read().await.len()
    }

    /// Clear all stored trips (useful for tests).
    pub async fn clear(&self) {
        self.trips.write().await.clear();
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn save(&self, trip: &Trip) -> Result<(), DomainError> {
        let mut trips = self.trips.write().await;
        trips.insert(trip.id(), trip.clone());
        Ok(())
    }

    async fn update(&self, trip: &Trip) -> Result<(), DomainError> {
        let mut trips = self.trips.write().await;
        if !trips.contains_key(&trip.id()) {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", trip.id()),
            ));
        }
        trips.insert(trip.id(), trip.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let trips = self.trips.read().await;
        Ok(trips.get(id).cloned())
    }

    async fn exists(&self, id: &TripId) -> Result<bool, DomainError> {
        let trips = self.trips.read().await;
        Ok(trips.contains_key(id))
    }

    async fn list(&self) -> Result<Vec<Trip>, DomainError> {
        let trips = self.trips.read().await;
        let mut all: Vec<Trip> = trips.values().cloned().collect();
        all.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| a.id().as_uuid().cmp(&b.id().as_uuid()))
        });
        Ok(all)
    }

    async fn delete(&self, id: &TripId) -> Result<(), DomainError> {
        let mut trips = self.trips.write().await;
        if trips.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", id),
            ));
        }
        Ok(())
    }
}
