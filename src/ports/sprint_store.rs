//! Sprint Store Port - Interface for persisting sprint state.
//!
//! The engine state is one flat snapshot with last-write-wins semantics;
//! the store holds at most one snapshot (the sprint in progress).

use async_trait::async_trait;

use crate::domain::sprint::SprintSnapshot;

/// Errors that can occur during sprint persistence.
///
/// Persistence failure is non-fatal by contract: the in-memory engine
/// remains authoritative for the current session regardless.
#[derive(Debug, thiserror::Error)]
pub enum SprintStoreError {
    #[error("Failed to serialize sprint state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize sprint state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for saving and restoring the sprint snapshot.
#[async_trait]
pub trait SprintStore: Send + Sync {
    /// Persists the snapshot, replacing any previous one.
    async fn save(&self, snapshot: &SprintSnapshot) -> Result<(), SprintStoreError>;

    /// Loads the persisted snapshot, if one exists.
    async fn load(&self) -> Result<Option<SprintSnapshot>, SprintStoreError>;

    /// Removes the persisted snapshot, if any. Idempotent.
    async fn clear(&self) -> Result<(), SprintStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_cause() {
        let err = SprintStoreError::SerializationFailed("bad json".to_string());
        assert!(err.to_string().contains("serialize"));
        assert!(err.to_string().contains("bad json"));

        let err = SprintStoreError::Io("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
