//! Filesystem implementation of the `DocumentStore` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use ecofinds_core::error::DomainError;
use ecofinds_core::storage::DocumentStore;

/// File-backed document store.
///
/// Each key maps to `<root>/<key>.json`. Writes go through a temporary file
/// followed by a rename, so a crash mid-write never leaves a half-written
/// document under the key.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    root: PathBuf,
}

impl FileDocumentStore {
    /// Creates a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| DomainError::Storage(format!("cannot create data dir: {e}")))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };
        let document = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::Storage(format!("malformed document {}: {e}", path.display()))
        })?;
        Ok(Some(document))
    }

    async fn put(&self, key: &str, document: serde_json::Value) -> Result<(), DomainError> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| DomainError::Storage(format!("cannot serialize {key}: {e}")))?;

        write_and_rename(&tmp, &path, &bytes)
            .await
            .map_err(|e| DomainError::Storage(format!("cannot write {}: {e}", path.display())))?;

        tracing::debug!(key, bytes = bytes.len(), "document persisted");
        Ok(())
    }
}

async fn write_and_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(tmp, bytes).await?;
    tokio::fs::rename(tmp, path).await
}
