//! Route definitions for Content domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{about, artworks, content, exhibitions, theme};
use super::middleware::ContentState;

/// Whole-document read and overwrite
fn content_routes() -> Router<ContentState> {
    Router::new().route(
        "/api/content",
        get(content::get_content).post(content::save_content),
    )
}

fn artwork_routes() -> Router<ContentState> {
    Router::new()
        .route(
            "/api/artworks",
            get(artworks::list_artworks).post(artworks::create_artwork),
        )
        .route("/api/artworks/featured", get(artworks::list_featured))
        .route(
            "/api/artworks/{id}",
            get(artworks::get_artwork)
                .patch(artworks::update_artwork)
                .delete(artworks::delete_artwork),
        )
}

fn exhibition_routes() -> Router<ContentState> {
    Router::new()
        .route(
            "/api/exhibitions",
            get(exhibitions::list_exhibitions).post(exhibitions::create_exhibition),
        )
        .route(
            "/api/exhibitions/grouped",
            get(exhibitions::grouped_exhibitions),
        )
        .route(
            "/api/exhibitions/{id}",
            patch(exhibitions::update_exhibition)
                .delete(exhibitions::delete_exhibition),
        )
}

fn page_routes() -> Router<ContentState> {
    Router::new()
        .route("/api/about", get(about::get_about).patch(about::update_about))
        .route("/api/theme", get(theme::get_theme).put(theme::update_theme))
        .route("/api/theme/reset-colors", post(theme::reset_colors))
}

/// Create all Content domain API routes
pub fn routes() -> Router<ContentState> {
    Router::new()
        .merge(content_routes())
        .merge(artwork_routes())
        .merge(exhibition_routes())
        .merge(page_routes())
}
