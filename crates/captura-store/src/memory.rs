//! In-memory document store for testing.
//!
//! Holds the document in a `RwLock<Option<Vec<u8>>>`. Nothing persists — all
//! data is lost when the process exits. Use this for unit tests and for dev
//! servers started with the memory backend.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{DocumentStore, StoreError};

/// An in-memory document store.
///
/// Cloning is cheap and clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let document = self.document.read().await;
        Ok(document.clone())
    }

    async fn save(&self, contents: &[u8]) -> Result<(), StoreError> {
        let mut document = self.document.write().await;
        *document = Some(contents.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_before_save_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_roundtrip() {
        let store = MemoryStore::new();
        store.save(b"[1,2,3]").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(b"[1,2,3]".to_vec()));
    }

    #[tokio::test]
    async fn save_overwrites_existing() {
        let store = MemoryStore::new();
        store.save(b"old").await.unwrap();
        store.save(b"new").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.save(b"shared").await.unwrap();
        assert_eq!(clone.load().await.unwrap(), Some(b"shared".to_vec()));
    }
}
