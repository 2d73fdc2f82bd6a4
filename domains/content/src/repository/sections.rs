//! About page and theme

use folio_common::Result;
use folio_store::{AboutData, ThemeColors, ThemeData};

use super::ContentRepository;
use crate::domain::patches::{AboutPatch, ThemeUpdate};

impl ContentRepository {
    pub async fn load_about(&self) -> Result<AboutData> {
        Ok(self.load_or_default().await.about)
    }

    pub async fn save_about(&self, about: AboutData) -> Result<()> {
        let mut document = self.load().await?;
        document.about = about;
        self.save(&document).await
    }

    /// Merge the present fields into the about page
    pub async fn update_about(&self, patch: AboutPatch) -> Result<AboutData> {
        let mut document = self.load().await?;
        patch.apply(&mut document.about);
        self.save(&document).await?;
        tracing::info!("About page updated");
        Ok(document.about)
    }

    /// Stored theme; `None` until one has been saved
    pub async fn load_theme(&self) -> Result<Option<ThemeData>> {
        Ok(self.load_or_default().await.theme)
    }

    pub async fn save_theme(&self, theme: ThemeData) -> Result<()> {
        let mut document = self.load().await?;
        document.theme = Some(theme);
        self.save(&document).await
    }

    /// Apply an update on top of the stored theme, or the default one
    pub async fn update_theme(&self, update: ThemeUpdate) -> Result<ThemeData> {
        let mut document = self.load().await?;
        let mut theme = document.theme.take().unwrap_or_default();
        update.apply(&mut theme);
        document.theme = Some(theme.clone());
        self.save(&document).await?;
        tracing::info!(is_dark = theme.is_dark, "Theme updated");
        Ok(theme)
    }

    /// Restore the default palette, keeping the dark-mode setting
    pub async fn reset_colors(&self) -> Result<ThemeData> {
        let mut document = self.load().await?;
        let mut theme = document.theme.take().unwrap_or_default();
        theme.colors = ThemeColors::default();
        document.theme = Some(theme.clone());
        self.save(&document).await?;
        tracing::info!("Theme colors reset");
        Ok(theme)
    }
}
