//! Route definitions for Admin domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, contact, nft, reset};
use super::middleware::AdminState;

/// Login flow and session introspection
fn auth_routes() -> Router<AdminState> {
    Router::new()
        .route("/api/auth/session", get(auth::get_session))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/logout", post(auth::logout))
}

fn contact_routes() -> Router<AdminState> {
    Router::new()
        .route("/api/contact", post(contact::send_message))
        .route("/api/contact/status", get(contact::status))
}

fn tool_routes() -> Router<AdminState> {
    Router::new()
        .route("/api/nft", get(nft::lookup))
        .route("/api/admin/reset", post(reset::reset_all))
}

/// Create all Admin domain API routes
pub fn routes() -> Router<AdminState> {
    Router::new()
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(tool_routes())
}
