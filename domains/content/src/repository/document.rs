//! Whole-document operations

use folio_common::Result;
use folio_store::ContentDocument;

use super::ContentRepository;

impl ContentRepository {
    /// The full document, created with defaults on first access
    pub async fn load_document(&self) -> Result<ContentDocument> {
        self.load().await
    }

    /// Overwrite the full document.
    ///
    /// A body without an admin password keeps the stored credentials, so
    /// content editors never reset the password by accident.
    pub async fn replace_document(&self, mut document: ContentDocument) -> Result<()> {
        if document.admin_password.is_empty() {
            let current = self.load().await?;
            document.admin_password = current.admin_password;
            document.password_changed = current.password_changed;
        }
        self.save(&document).await?;
        tracing::info!(
            artworks = document.artworks.len(),
            exhibitions = document.exhibitions.len(),
            "Content document replaced"
        );
        Ok(())
    }

    /// Restore every section and the admin password to factory defaults
    pub async fn reset_all(&self) -> Result<ContentDocument> {
        let document = self.store().default_document();
        self.save(&document).await?;
        tracing::warn!("All content reset to defaults");
        Ok(document)
    }
}
