//! In-memory sprint store.
//!
//! Holds the snapshot in process memory. Useful for tests and for
//! running the engine without a data directory.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::sprint::SprintSnapshot;
use crate::ports::{SprintStore, SprintStoreError};

/// Process-resident store for the sprint snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySprintStore {
    snapshot: Arc<RwLock<Option<SprintSnapshot>>>,
}

impl InMemorySprintStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a snapshot is currently held.
    pub async fn is_populated(&self) -> bool {
        self.snapshot.read().await.is_some()
    }
}

#[async_trait]
impl SprintStore for InMemorySprintStore {
    async fn save(&self, snapshot: &SprintSnapshot) -> Result<(), SprintStoreError> {
        let mut slot = self.snapshot.write().await;
        *slot = Some(snapshot.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<SprintSnapshot>, SprintStoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn clear(&self) -> Result<(), SprintStoreError> {
        let mut slot = self.snapshot.write().await;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sprint::SprintEngine;

    fn snapshot() -> SprintSnapshot {
        let mut engine = SprintEngine::new();
        engine.initialize_session();
        engine.set_problem_input("Should we pivot?");
        engine.snapshot().unwrap()
    }

    #[tokio::test]
    async fn save_then_load_returns_equal_snapshot() {
        let store = InMemorySprintStore::new();
        let snap = snapshot();
        store.save(&snap).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, snap);
    }

    #[tokio::test]
    async fn load_empty_store_returns_none() {
        let store = InMemorySprintStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_previous_snapshot() {
        let store = InMemorySprintStore::new();
        let first = snapshot();
        let second = snapshot();
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.session_id, second.session_id);
        assert_ne!(loaded.session_id, first.session_id);
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = InMemorySprintStore::new();
        store.save(&snapshot()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(!store.is_populated().await);
    }
}
