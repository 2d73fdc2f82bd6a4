//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_common::Error;
use serde_json::json;

/// Minimum length of an administrator password, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    /// No valid admin session for this request
    NotAuthenticated,
    /// Password did not match
    InvalidPassword,
    /// New password and confirmation differ
    PasswordMismatch,
    /// New password shorter than `MIN_PASSWORD_LEN`
    PasswordTooShort,
    /// Stored credentials could not be read or written
    StoreUnavailable,
}

impl AuthError {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AuthError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "NOT_AUTHENTICATED",
                "Admin login required",
            ),
            AuthError::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                "INVALID_PASSWORD",
                "Invalid password",
            ),
            AuthError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "PASSWORD_MISMATCH",
                "Passwords do not match",
            ),
            AuthError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "PASSWORD_TOO_SHORT",
                "Password must be at least 8 characters",
            ),
            AuthError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AUTH_STORE_ERROR",
                "Failed to access stored credentials",
            ),
        }
    }

    /// User-facing message
    pub fn message(&self) -> &'static str {
        self.parts().2
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthenticated | AuthError::InvalidPassword => {
                Error::Authentication(err.message().to_string())
            }
            AuthError::PasswordMismatch | AuthError::PasswordTooShort => {
                Error::Validation(err.message().to_string())
            }
            AuthError::StoreUnavailable => Error::Persistence(err.message().to_string()),
        }
    }
}
