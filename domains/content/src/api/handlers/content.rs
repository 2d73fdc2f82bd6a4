//! Whole-document content handlers

use axum::{extract::State, Json};
use folio_common::{JsonBody, Result};
use folio_store::ContentDocument;
use serde::Serialize;

use crate::api::middleware::ContentState;

/// Acknowledgement for write operations
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Read the full content document
///
/// **GET /api/content**
///
/// Creates and persists the default document on first access.
pub async fn get_content(State(state): State<ContentState>) -> Result<Json<ContentDocument>> {
    Ok(Json(state.repo.load_document().await?))
}

/// Overwrite the full content document
///
/// **POST /api/content**
///
/// An empty `adminPassword` keeps the stored credentials.
pub async fn save_content(
    State(state): State<ContentState>,
    JsonBody(document): JsonBody<ContentDocument>,
) -> Result<Json<SuccessResponse>> {
    state.repo.replace_document(document).await?;
    Ok(Json(SuccessResponse { success: true }))
}
