//! Data facade over the content store
//!
//! Every mutation loads the full document, replaces one section and saves
//! the full document back. Read-only section views fall back to the
//! default document when the store cannot be read; mutations fail instead. There is no locking: two concurrent mutations
//! race and the later save wins.

mod artworks;
mod document;
mod exhibitions;
mod sections;

use folio_common::Result;
use folio_store::{ContentDocument, ContentStore};

/// Typed access to the sections of the content document
#[derive(Clone)]
pub struct ContentRepository {
    store: ContentStore,
}

impl ContentRepository {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    async fn load(&self) -> Result<ContentDocument> {
        Ok(self.store.load().await?)
    }

    /// Document for read-only views: an unreadable store degrades to the
    /// default document instead of failing the page
    async fn load_or_default(&self) -> ContentDocument {
        match self.store.load().await {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(error = %e, "Content unreadable, serving defaults");
                self.store.default_document()
            }
        }
    }

    async fn save(&self, document: &ContentDocument) -> Result<()> {
        Ok(self.store.save(document).await?)
    }

    /// Load, edit one section, save. `edit` decides whether anything changed;
    /// nothing is written when it returns `None`.
    async fn modify<T>(
        &self,
        edit: impl FnOnce(&mut ContentDocument) -> Option<T>,
    ) -> Result<Option<T>> {
        let mut document = self.load().await?;
        let Some(result) = edit(&mut document) else {
            return Ok(None);
        };
        self.save(&document).await?;
        Ok(Some(result))
    }
}
