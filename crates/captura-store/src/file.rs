//! Flat-file document store.
//!
//! The production backend: one file on disk, read in full on load and
//! rewritten in full on save. A missing file is not an error — it reads as
//! "no document yet". Writers are expected to serialize themselves (the
//! intake service does); this type performs no locking of its own.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{DocumentStore, StoreError};

/// A document store backed by a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the file at `path`. The file is not touched until
    /// the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait::async_trait]
impl DocumentStore for FileStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read {
                path: self.path_string(),
                reason: err.to_string(),
            }),
        }
    }

    async fn save(&self, contents: &[u8]) -> Result<(), StoreError> {
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|err| StoreError::Write {
                path: self.path_string(),
                reason: err.to_string(),
            })
    }
}
