//! Full content reset

use axum::{extract::State, response::Response};
use folio_auth::{AdminSession, Session};
use folio_common::Result;

use super::{with_cookie, SuccessResponse};
use crate::api::middleware::AdminState;

/// Restore all content and the admin password to factory defaults
///
/// **POST /api/admin/reset**
///
/// The session flag is cleared: once the default password is back in force
/// no session is valid.
pub async fn reset_all(_admin: AdminSession, State(state): State<AdminState>) -> Result<Response> {
    state.repo.reset_all().await?;
    Ok(with_cookie(
        SuccessResponse::ok(),
        Some(Session::clear_cookie()),
    ))
}
