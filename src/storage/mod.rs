//! Filesystem JSONL storage.
//!
//! JSONL files under the data directory are the source of truth for all
//! club records. Derived statistics are never written back; they are
//! recomputed from these files on every query.

use std::path::PathBuf;
use thiserror::Error;

mod jsonl;
mod store;

pub use jsonl::{EntityType, JsonlReader, JsonlWriter};
pub use store::ClubStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory holding the club's JSONL record files.
    pub fn records_dir(&self) -> PathBuf {
        self.data_dir.join("records")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));
        assert_eq!(config.records_dir(), PathBuf::from("/data/records"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
