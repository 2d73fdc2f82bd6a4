//! About page handlers

use axum::{extract::State, Json};
use folio_auth::AdminSession;
use folio_common::{Result, ValidatedJson};
use folio_store::AboutData;

use crate::api::middleware::ContentState;
use crate::domain::patches::AboutPatch;

/// **GET /api/about**
pub async fn get_about(State(state): State<ContentState>) -> Result<Json<AboutData>> {
    Ok(Json(state.repo.load_about().await?))
}

/// Merge fields into the about page
///
/// **PATCH /api/about**
pub async fn update_about(
    _admin: AdminSession,
    State(state): State<ContentState>,
    ValidatedJson(patch): ValidatedJson<AboutPatch>,
) -> Result<Json<AboutData>> {
    Ok(Json(state.repo.update_about(patch).await?))
}
