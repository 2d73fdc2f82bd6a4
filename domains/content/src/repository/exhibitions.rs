//! Exhibition section

use folio_common::Result;
use folio_store::{Exhibition, ExhibitionDraft};

use super::ContentRepository;
use crate::domain::ids::next_free_id;
use crate::domain::patches::ExhibitionPatch;
use crate::domain::views::{group_exhibitions, GroupedExhibitions};

impl ContentRepository {
    pub async fn load_exhibitions(&self) -> Result<Vec<Exhibition>> {
        Ok(self.load_or_default().await.exhibitions)
    }

    /// Replace the whole exhibition list
    pub async fn save_exhibitions(&self, exhibitions: Vec<Exhibition>) -> Result<()> {
        let mut document = self.load().await?;
        document.exhibitions = exhibitions;
        self.save(&document).await
    }

    pub async fn grouped_exhibitions(&self) -> Result<GroupedExhibitions> {
        Ok(group_exhibitions(self.load_exhibitions().await?))
    }

    pub async fn add_exhibition(&self, draft: ExhibitionDraft) -> Result<Exhibition> {
        let mut document = self.load().await?;
        let id = next_free_id(|candidate| document.exhibitions.iter().any(|e| e.id == candidate));
        let exhibition = draft.into_exhibition(id);
        document.exhibitions.push(exhibition.clone());
        self.save(&document).await?;

        tracing::info!(
            exhibition_id = %exhibition.id,
            status = %exhibition.status,
            "Exhibition added"
        );
        Ok(exhibition)
    }

    pub async fn update_exhibition(
        &self,
        id: &str,
        patch: ExhibitionPatch,
    ) -> Result<Option<Exhibition>> {
        let updated = self
            .modify(|document| {
                let exhibition = document.exhibitions.iter_mut().find(|e| e.id == id)?;
                patch.apply(exhibition);
                Some(exhibition.clone())
            })
            .await?;

        if updated.is_some() {
            tracing::info!(exhibition_id = %id, "Exhibition updated");
        }
        Ok(updated)
    }

    pub async fn delete_exhibition(&self, id: &str) -> Result<bool> {
        let removed = self
            .modify(|document| {
                let before = document.exhibitions.len();
                document.exhibitions.retain(|e| e.id != id);
                (document.exhibitions.len() < before).then_some(())
            })
            .await?
            .is_some();

        if removed {
            tracing::info!(exhibition_id = %id, "Exhibition deleted");
        }
        Ok(removed)
    }
}
