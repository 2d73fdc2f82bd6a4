//! Admin domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use folio_auth::AuthBackend;
use folio_content::ContentRepository;
use folio_email::EmailService;
use folio_nft::NftLookup;

/// Application state for the Admin domain
#[derive(Clone)]
pub struct AdminState {
    pub auth: AuthBackend,
    pub repo: ContentRepository,
    pub email: Arc<dyn EmailService>,
    pub nft: Arc<dyn NftLookup>,
}

impl FromRef<AdminState> for AuthBackend {
    fn from_ref(state: &AdminState) -> Self {
        state.auth.clone()
    }
}
