//! Admin login flow handlers
//!
//! The session is the client-held `isAuthenticated` cookie. These handlers
//! set or clear it; every other admin route re-validates it through the
//! `AdminSession` extractor.

use axum::{extract::State, response::Response};
use folio_auth::{AuthError, AuthOutcome, AuthState, PasswordChange, Session};
use folio_common::{JsonBody, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{with_cookie, SuccessResponse};
use crate::api::middleware::AdminState;

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub password: String,
}

/// Current session state
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub state: AuthState,
}

/// Resolve the caller's session flag
///
/// **GET /api/auth/session**
///
/// A flag presented while the default password is still in force is stale
/// and gets cleared.
pub async fn get_session(
    State(state): State<AdminState>,
    session: Session,
) -> Result<Response, AuthError> {
    let resolution = state.auth.resolve(&session).await?;
    let cookie = resolution.clear_flag.then(Session::clear_cookie);
    Ok(with_cookie(
        SessionResponse {
            state: resolution.state,
        },
        cookie,
    ))
}

/// Check the admin password
///
/// **POST /api/auth/login**
///
/// The factory-default password is accepted with `isDefault: true` but
/// grants no session; the caller must change the password first.
pub async fn login(
    State(state): State<AdminState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Response, AuthError> {
    let outcome: AuthOutcome = state.auth.authenticate(&request.password).await?;
    if !outcome.success {
        return Err(AuthError::InvalidPassword);
    }

    let cookie = outcome.grants_session().then(Session::set_cookie);
    Ok(with_cookie(outcome, cookie))
}

/// Set a new admin password
///
/// **POST /api/auth/change-password**
///
/// Allowed for a logged-in session, or with `currentPassword` while the
/// default password is in force.
pub async fn change_password(
    State(state): State<AdminState>,
    session: Session,
    JsonBody(request): JsonBody<PasswordChange>,
) -> Result<Response, AuthError> {
    state.auth.change_password(&session, &request).await?;
    Ok(with_cookie(
        SuccessResponse::ok(),
        Some(Session::set_cookie()),
    ))
}

/// **POST /api/auth/logout**
pub async fn logout(State(state): State<AdminState>) -> Response {
    let next = state.auth.logout();
    tracing::info!(state = %next, "Admin logged out");
    with_cookie(SuccessResponse::ok(), Some(Session::clear_cookie()))
}
