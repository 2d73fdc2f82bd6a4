//! Content domain state and auth backend integration

use axum::extract::FromRef;
use folio_auth::AuthBackend;

use crate::repository::ContentRepository;

/// Application state for the Content domain
#[derive(Clone)]
pub struct ContentState {
    pub repo: ContentRepository,
    pub auth: AuthBackend,
}

impl FromRef<ContentState> for AuthBackend {
    fn from_ref(state: &ContentState) -> Self {
        state.auth.clone()
    }
}
