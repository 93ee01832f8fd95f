//! Document persistence for Captura.
//!
//! This crate defines the [`DocumentStore`] trait — a minimal whole-document
//! storage interface that knows nothing about submissions or their schema.
//! The intake service in `captura-core` owns serialization; this layer only
//! moves opaque bytes.
//!
//! Two implementations are provided:
//!
//! - [`FileStore`] — production default, a single flat file rewritten on
//!   every save
//! - [`MemoryStore`] — in-memory, for tests and throwaway dev servers

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A pluggable whole-document store.
///
/// The store holds exactly one document. There is no partial update: a save
/// replaces the previous document in full, and a load returns it in full.
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Load the current document.
    ///
    /// Returns `Ok(None)` if no document has ever been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the underlying medium fails.
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the document with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the underlying medium fails.
    async fn save(&self, contents: &[u8]) -> Result<(), StoreError>;
}
