//! Axum extractors for the auth gate
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::session::Session;

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}

/// Request made by a logged-in administrator.
///
/// Rejects with 401 unless the session flag resolves to `LoggedIn`.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        let session = Session::from_headers(&parts.headers);

        let resolution = backend.resolve(&session).await?;
        if !resolution.state.is_logged_in() {
            tracing::debug!(state = %resolution.state, "Admin request rejected");
            return Err(AuthError::NotAuthenticated);
        }

        Ok(AdminSession)
    }
}
