//! Folio content store
//!
//! Owns the lifecycle of the single persisted `ContentDocument`:
//! - `StorageBackend` abstracts where the document lives (file, memory)
//! - `ContentStore` loads it wholesale, synthesizing and persisting a
//!   default document on first access, and saves it wholesale
//!
//! There is no locking or versioning. Every save replaces the whole
//! document, so concurrent writers race and the last write wins.

pub mod document;
pub mod error;
pub mod file;
pub mod memory;

use std::sync::Arc;

pub use document::{
    AboutData, Artwork, ArtworkDraft, ContentDocument, Dimensions, Exhibition, ExhibitionDraft,
    ExhibitionStatus, Measure, SocialLink, ThemeColors, ThemeData,
};
pub use error::StoreError;
pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Where the content document is persisted
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the stored document; `None` when nothing has been persisted yet
    async fn read(&self) -> Result<Option<ContentDocument>, StoreError>;

    /// Replace the stored document
    async fn write(&self, document: &ContentDocument) -> Result<(), StoreError>;
}

/// Whole-document access to site content.
///
/// Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct ContentStore {
    backend: Arc<dyn StorageBackend>,
    default_password: String,
}

impl ContentStore {
    pub fn new(backend: Arc<dyn StorageBackend>, default_password: impl Into<String>) -> Self {
        Self {
            backend,
            default_password: default_password.into(),
        }
    }

    /// The configured factory-default admin password
    pub fn default_password(&self) -> &str {
        &self.default_password
    }

    /// Document written on first access and by a full reset
    pub fn default_document(&self) -> ContentDocument {
        ContentDocument::with_default_password(&self.default_password)
    }

    /// Load the full document, creating the default one if none exists.
    pub async fn load(&self) -> Result<ContentDocument, StoreError> {
        match self.backend.read().await {
            Ok(Some(mut document)) => {
                if document.admin_password.is_empty() {
                    document.admin_password = self.default_password.clone();
                }
                Ok(document)
            }
            Ok(None) => {
                let document = self.default_document();
                self.backend.write(&document).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to persist default content document");
                    e
                })?;
                tracing::info!("Initialized default content document");
                Ok(document)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load content document");
                Err(e)
            }
        }
    }

    /// Overwrite the full document.
    pub async fn save(&self, document: &ContentDocument) -> Result<(), StoreError> {
        self.backend.write(document).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save content document");
            e
        })
    }
}
