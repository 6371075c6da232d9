//! File-based sprint store.
//!
//! Persists the snapshot as a single JSON file under a base directory,
//! mirroring the durable client-side store of the original surface.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::sprint::SprintSnapshot;
use crate::ports::{SprintStore, SprintStoreError};

const SNAPSHOT_FILE: &str = "sprint.json";

/// JSON-file-backed store for the sprint snapshot.
#[derive(Debug, Clone)]
pub struct FileSprintStore {
    base_path: PathBuf,
}

impl FileSprintStore {
    /// Creates a store rooted at `base_path`. The directory is created
    /// lazily on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn snapshot_path(&self) -> PathBuf {
        self.base_path.join(SNAPSHOT_FILE)
    }
}

#[async_trait]
impl SprintStore for FileSprintStore {
    async fn save(&self, snapshot: &SprintSnapshot) -> Result<(), SprintStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SprintStoreError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SprintStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.snapshot_path(), json)
            .await
            .map_err(|e| SprintStoreError::Io(e.to_string()))
    }

    async fn load(&self) -> Result<Option<SprintSnapshot>, SprintStoreError> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| SprintStoreError::Io(e.to_string()))?;

        let snapshot = serde_json::from_str(&json)
            .map_err(|e| SprintStoreError::DeserializationFailed(e.to_string()))?;
        Ok(Some(snapshot))
    }

    async fn clear(&self) -> Result<(), SprintStoreError> {
        let path = self.snapshot_path();
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SprintStoreError::Io(e.to_string())),
        }
    }
}
