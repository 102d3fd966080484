//! File-based trip repository adapter.
//!
//! Persists each trip as a JSON document under a data directory:
//!
//! ```text
//! {data_dir}/
//!   {trip_id}.json
//! ```
//!
//! Intended for single-process deployments that need trips to survive
//! a restart without running a database.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, TripId};
use crate::domain::trip::Trip;
use crate::ports::TripRepository;

/// Trip repository backed by one JSON file per trip.
#[derive(Debug, Clone)]
pub struct JsonFileTripRepository {
    data_dir: PathBuf,
}

impl JsonFileTripRepository {
    /// Create a repository rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn trip_file_path(&self, id: &TripId) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    async fn ensure_data_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to create data directory: {e}"),
            )
        })
    }

    async fn write_trip(&self, trip: &Trip) -> Result<(), DomainError> {
        self.ensure_data_dir().await?;

        let json = serde_json::to_string_pretty(trip).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationFailed,
                format!("Failed to serialize trip: {e}"),
            )
        })?;

        fs::write(self.trip_file_path(&trip.id()), json)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::StorageError, format!("Failed to write trip: {e}"))
            })
    }

    async fn read_trip(&self, path: &Path) -> Result<Trip, DomainError> {
        let json = fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(ErrorCode::StorageError, format!("Failed to read trip: {e}"))
        })?;

        serde_json::from_str(&json).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationFailed,
                format!("Failed to deserialize trip: {e}"),
            )
        })
    }
}

#[async_trait]
impl TripRepository for JsonFileTripRepository {
    async fn save(&self, trip: &Trip) -> Result<(), DomainError> {
        self.write_trip(trip).await
    }

    async fn update(&self, trip: &Trip) -> Result<(), DomainError> {
        if !self.trip_file_path(&trip.id()).exists() {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", trip.id()),
            ));
        }
        self.write_trip(trip).await
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let path = self.trip_file_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_trip(&path).await?))
    }

    async fn exists(&self, id: &TripId) -> Result<bool, DomainError> {
        Ok(self.trip_file_path(id).exists())
    }

    async fn list(&self) -> Result<Vec<Trip>, DomainError> {
        if !self.data_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.data_dir).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to read data directory: {e}"),
            )
        })?;

        let mut trips = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to read data directory: {e}"),
            )
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                trips.push(self.read_trip(&path).await?);
            }
        }

        trips.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| a.id().as_uuid().cmp(&b.id().as_uuid()))
        });
        Ok(trips)
    }

    async fn delete(&self, id: &TripId) -> Result<(), DomainError> {
        let path = self.trip_file_path(id);
        if !path.exists() {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", id),
            ));
        }

        fs::remove_file(&path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to delete trip: {e}"),
            )
        })
    }
}
