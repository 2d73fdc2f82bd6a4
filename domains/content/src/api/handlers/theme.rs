//! Theme handlers

use axum::{extract::State, Json};
use folio_auth::AdminSession;
use folio_common::{Result, ValidatedJson};
use folio_store::ThemeData;

use crate::api::middleware::ContentState;
use crate::domain::patches::ThemeUpdate;

/// Stored theme, or the default palette when none has been saved
///
/// **GET /api/theme**
pub async fn get_theme(State(state): State<ContentState>) -> Result<Json<ThemeData>> {
    let theme = state.repo.load_theme().await?.unwrap_or_default();
    Ok(Json(theme))
}

/// **PUT /api/theme**
pub async fn update_theme(
    _admin: AdminSession,
    State(state): State<ContentState>,
    ValidatedJson(update): ValidatedJson<ThemeUpdate>,
) -> Result<Json<ThemeData>> {
    Ok(Json(state.repo.update_theme(update).await?))
}

/// **POST /api/theme/reset-colors**
pub async fn reset_colors(
    _admin: AdminSession,
    State(state): State<ContentState>,
) -> Result<Json<ThemeData>> {
    Ok(Json(state.repo.reset_colors().await?))
}
