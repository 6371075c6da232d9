//! Snapshot storage configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Where the sprint snapshot is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for the snapshot file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
