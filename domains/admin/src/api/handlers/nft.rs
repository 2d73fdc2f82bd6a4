//! NFT metadata import

use axum::{
    extract::{Query, State},
    Json,
};
use folio_auth::AdminSession;
use folio_nft::lookup_artwork;
use folio_store::ArtworkDraft;
use serde::Deserialize;

use crate::api::middleware::AdminState;

#[derive(Debug, Deserialize)]
pub struct NftQuery {
    pub url: String,
}

/// Prefill an artwork from a marketplace token URL
///
/// **GET /api/nft?url=**
///
/// Returns `null` when the URL is not a token URL or the lookup fails.
pub async fn lookup(
    _admin: AdminSession,
    State(state): State<AdminState>,
    Query(query): Query<NftQuery>,
) -> Json<Option<ArtworkDraft>> {
    Json(lookup_artwork(state.nft.as_ref(), &query.url).await)
}
