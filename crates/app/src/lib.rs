//! Folio application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
        HeaderValue, Method,
    },
    Router,
};
use folio_admin::AdminState;
use folio_auth::AuthBackend;
use folio_common::Config;
use folio_content::{ContentRepository, ContentState};
use folio_email::{EmailConfig, EmailService, EmailServiceFactory};
use folio_nft::{NftConfig, NftLookup, NftServiceFactory};
use folio_store::{ContentStore, FileBackend};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

/// Largest accepted request body (the content document may embed images)
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Everything the routers need, already constructed
#[derive(Clone)]
pub struct AppServices {
    pub store: ContentStore,
    pub email: Arc<dyn EmailService>,
    pub nft: Arc<dyn NftLookup>,
}

/// Create the main application router with all routes, backed by the
/// services configured in the environment
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    // Content store on disk
    let backend = FileBackend::new(config.content_file());
    backend.ensure_dir().await?;
    tracing::info!(path = %backend.path().display(), "Using content file");
    let store = ContentStore::new(Arc::new(backend), config.default_admin_password.clone());

    // Create email service from environment
    let email_config = EmailConfig::from_env()?;
    if !email_config.is_configured() {
        tracing::warn!("EmailJS credentials missing; contact form disabled");
    }
    let email = EmailServiceFactory::create(email_config)?;

    // Create NFT lookup from environment
    let nft = NftServiceFactory::create(NftConfig::from_env()?)?;

    Ok(build_router(AppServices {
        store,
        email: Arc::from(email),
        nft: Arc::from(nft),
    }))
}

/// Compose domain routers with shared infrastructure routes
pub fn build_router(services: AppServices) -> Router {
    let repo = ContentRepository::new(services.store.clone());
    let auth = AuthBackend::new(services.store);

    let content_state = ContentState {
        repo: repo.clone(),
        auth: auth.clone(),
    };

    let admin_state = AdminState {
        auth,
        repo,
        email: services.email,
        nft: services.nft,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Folio API v0.0.1-SNAPSHOT" }),
        )
        .merge(folio_content::routes().with_state(content_state))
        .merge(folio_admin::routes().with_state(admin_state))
}

/// CORS policy from a comma-separated origin list.
///
/// Explicit origins are allowed to send credentials (the session cookie).
/// Unset means permissive without credentials, which only suits a
/// same-origin admin UI.
pub fn build_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let Some(allowed_origins) = allowed_origins.filter(|o| !o.trim().is_empty()) else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}

/// Request body size cap
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
