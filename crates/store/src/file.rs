//! File-backed storage: one pretty-printed JSON file
//!
//! Writes land in a sibling temp file that is renamed over the target, so a
//! concurrent reader sees either the old or the new document. There is no
//! lock; concurrent writers race and the last rename wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{ContentDocument, StorageBackend, StoreError};

/// Storage backend persisting the document at a fixed path
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Unique per write, so concurrent writers never share a temp file
    fn temp_path(&self) -> PathBuf {
        static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl StorageBackend for FileBackend {
    async fn read(&self) -> Result<Option<ContentDocument>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document = serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)?;
        Ok(Some(document))
    }

    async fn write(&self, document: &ContentDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;

        self.ensure_dir().await?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Content document written");
        Ok(())
    }
}
