//! Exhibition API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use folio_auth::AdminSession;
use folio_common::{Error, Result, ValidatedJson};
use folio_store::Exhibition;

use crate::api::middleware::ContentState;
use crate::domain::patches::{ExhibitionPatch, NewExhibition};
use crate::domain::views::GroupedExhibitions;

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("Exhibition {} not found", id))
}

/// **GET /api/exhibitions**
pub async fn list_exhibitions(
    State(state): State<ContentState>,
) -> Result<Json<Vec<Exhibition>>> {
    Ok(Json(state.repo.load_exhibitions().await?))
}

/// Exhibitions bucketed by status, newest start date first
///
/// **GET /api/exhibitions/grouped**
pub async fn grouped_exhibitions(
    State(state): State<ContentState>,
) -> Result<Json<GroupedExhibitions>> {
    Ok(Json(state.repo.grouped_exhibitions().await?))
}

/// **POST /api/exhibitions**
pub async fn create_exhibition(
    _admin: AdminSession,
    State(state): State<ContentState>,
    ValidatedJson(request): ValidatedJson<NewExhibition>,
) -> Result<(StatusCode, Json<Exhibition>)> {
    let exhibition = state.repo.add_exhibition(request.into()).await?;
    Ok((StatusCode::CREATED, Json(exhibition)))
}

/// **PATCH /api/exhibitions/{id}**
pub async fn update_exhibition(
    _admin: AdminSession,
    State(state): State<ContentState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ExhibitionPatch>,
) -> Result<Json<Exhibition>> {
    state
        .repo
        .update_exhibition(&id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// **DELETE /api/exhibitions/{id}**
pub async fn delete_exhibition(
    _admin: AdminSession,
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.repo.delete_exhibition(&id).await? {
        return Err(not_found(&id));
    }
    Ok(StatusCode::NO_CONTENT)
}
