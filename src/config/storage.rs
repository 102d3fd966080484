//! Trip storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Trip storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for trip JSON files (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Storage backend type
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Volatile in-process map, for tests and demos
    Memory,
    /// One JSON file per trip under `data_dir`
    #[default]
    File,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.trim().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "./data/trips".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.data_dir, "./data/trips");
    }

    #[test]
    fn test_validation_rejects_blank_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_memory_backend_ignores_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: String::new(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backend_deserializes_from_lowercase() {
        let config: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(config, StorageBackend::Memory);
    }
}
