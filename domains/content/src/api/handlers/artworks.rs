//! Artwork API handlers
//!
//! Reads are public; every mutation requires an admin session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use folio_auth::AdminSession;
use folio_common::{Error, Result, ValidatedJson};
use folio_store::Artwork;

use crate::api::middleware::ContentState;
use crate::domain::patches::{ArtworkPatch, NewArtwork};
use crate::domain::views::featured_artworks;

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("Artwork {} not found", id))
}

/// List all artworks in stored order
///
/// **GET /api/artworks**
pub async fn list_artworks(State(state): State<ContentState>) -> Result<Json<Vec<Artwork>>> {
    Ok(Json(state.repo.load_artworks().await?))
}

/// **GET /api/artworks/featured**
pub async fn list_featured(State(state): State<ContentState>) -> Result<Json<Vec<Artwork>>> {
    let artworks = state.repo.load_artworks().await?;
    Ok(Json(featured_artworks(artworks)))
}

/// **GET /api/artworks/{id}**
pub async fn get_artwork(
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<Json<Artwork>> {
    let artwork = state
        .repo
        .get_artwork(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(artwork))
}

/// Add an artwork
///
/// **POST /api/artworks**
///
/// The id is assigned by the server.
pub async fn create_artwork(
    _admin: AdminSession,
    State(state): State<ContentState>,
    ValidatedJson(request): ValidatedJson<NewArtwork>,
) -> Result<(StatusCode, Json<Artwork>)> {
    let artwork = state.repo.add_artwork(request.into()).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

/// Merge fields into an artwork
///
/// **PATCH /api/artworks/{id}**
pub async fn update_artwork(
    _admin: AdminSession,
    State(state): State<ContentState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ArtworkPatch>,
) -> Result<Json<Artwork>> {
    let artwork = state
        .repo
        .update_artwork(&id, patch)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(artwork))
}

/// **DELETE /api/artworks/{id}**
pub async fn delete_artwork(
    _admin: AdminSession,
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.repo.delete_artwork(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}
