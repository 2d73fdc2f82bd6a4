//! HTTP handlers for the Admin domain

pub mod auth;
pub mod contact;
pub mod nft;
pub mod reset;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Acknowledgement for write operations
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// JSON response carrying an optional `Set-Cookie` header
pub(crate) fn with_cookie<T: Serialize>(body: T, cookie: Option<HeaderValue>) -> Response {
    let mut response = Json(body).into_response();
    if let Some(cookie) = cookie {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}
