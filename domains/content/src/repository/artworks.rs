//! Artwork section

use folio_common::Result;
use folio_store::{Artwork, ArtworkDraft};

use super::ContentRepository;
use crate::domain::ids::next_free_id;
use crate::domain::patches::ArtworkPatch;

impl ContentRepository {
    pub async fn load_artworks(&self) -> Result<Vec<Artwork>> {
        Ok(self.load_or_default().await.artworks)
    }

    /// Replace the whole artwork list
    pub async fn save_artworks(&self, artworks: Vec<Artwork>) -> Result<()> {
        let mut document = self.load().await?;
        document.artworks = artworks;
        self.save(&document).await
    }

    pub async fn get_artwork(&self, id: &str) -> Result<Option<Artwork>> {
        Ok(self
            .load_artworks()
            .await?
            .into_iter()
            .find(|artwork| artwork.id == id))
    }

    /// Append a new artwork with a freshly issued id
    pub async fn add_artwork(&self, draft: ArtworkDraft) -> Result<Artwork> {
        let mut document = self.load().await?;
        let id = next_free_id(|candidate| document.artworks.iter().any(|a| a.id == candidate));
        let artwork = draft.into_artwork(id);
        document.artworks.push(artwork.clone());
        self.save(&document).await?;

        tracing::info!(artwork_id = %artwork.id, "Artwork added");
        Ok(artwork)
    }

    /// Merge `patch` into the artwork with `id`; `None` when no such artwork
    pub async fn update_artwork(&self, id: &str, patch: ArtworkPatch) -> Result<Option<Artwork>> {
        let updated = self
            .modify(|document| {
                let artwork = document.artworks.iter_mut().find(|a| a.id == id)?;
                patch.apply(artwork);
                Some(artwork.clone())
            })
            .await?;

        match &updated {
            Some(_) => tracing::info!(artwork_id = %id, "Artwork updated"),
            None => tracing::debug!(artwork_id = %id, "Artwork update for unknown id"),
        }
        Ok(updated)
    }

    /// Remove the artwork with `id`; `false` when no such artwork
    pub async fn delete_artwork(&self, id: &str) -> Result<bool> {
        let removed = self
            .modify(|document| {
                let before = document.artworks.len();
                document.artworks.retain(|a| a.id != id);
                (document.artworks.len() < before).then_some(())
            })
            .await?
            .is_some();

        if removed {
            tracing::info!(artwork_id = %id, "Artwork deleted");
        }
        Ok(removed)
    }
}
