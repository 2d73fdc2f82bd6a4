//! Client-held session flag
//!
//! The flag is an `isAuthenticated=true` cookie. It is unsigned and trusted
//! at face value; the server re-validates it only against the stored
//! credentials (see `AuthBackend::resolve`).

use axum::http::{header, HeaderMap, HeaderValue};

/// Cookie carrying the session flag
pub const SESSION_COOKIE: &str = "isAuthenticated";

const SET_FLAG: &str = "isAuthenticated=true; Path=/; Max-Age=31536000; SameSite=Lax";
const CLEAR_FLAG: &str = "isAuthenticated=; Path=/; Max-Age=0; SameSite=Lax";

/// Session flag as presented by the client on one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub authenticated: bool,
}

impl Session {
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }

    /// Read the flag from all `Cookie` headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let authenticated = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(name, value)| name == SESSION_COOKIE && value == "true");

        Self { authenticated }
    }

    /// `Set-Cookie` value that sets the flag
    pub fn set_cookie() -> HeaderValue {
        HeaderValue::from_static(SET_FLAG)
    }

    /// `Set-Cookie` value that clears the flag
    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static(CLEAR_FLAG)
    }
}
