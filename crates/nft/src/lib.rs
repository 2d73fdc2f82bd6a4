//! Folio NFT Metadata Lookup
//!
//! Turns a marketplace token URL into an artwork draft ready for the
//! gallery:
//! - objkt.com GraphQL API for production lookups
//! - Mock lookup service for testing and development
//!
//! Lookups never fail past this crate's boundary: `lookup_artwork` reports
//! any problem as "no data".

use std::sync::LazyLock;

use folio_store::ArtworkDraft;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mock;
pub mod objkt;

const IPFS_SCHEME: &str = "ipfs://";
const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Medium recorded for every marketplace token
pub const NFT_MEDIUM: &str = "Digital";

static OBJKT_TOKEN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://objkt\.com/tokens/([^/]+)/(\d+)").expect("objkt url regex is valid")
});

#[derive(Error, Debug)]
pub enum NftError {
    #[error("Not a marketplace token URL: {0}")]
    InvalidUrl(String),

    #[error("NFT configuration error: {0}")]
    Configuration(String),

    #[error("NFT metadata request failed: {0}")]
    Request(String),

    #[error("NFT metadata response invalid: {0}")]
    Response(String),

    #[error("Token not found: {0}")]
    NotFound(String),
}

/// A token on the marketplace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub contract: String,
    pub token_id: String,
}

impl TokenRef {
    /// Canonical marketplace link for the token
    pub fn url(&self) -> String {
        format!("https://objkt.com/tokens/{}/{}", self.contract, self.token_id)
    }
}

impl std::fmt::Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.contract, self.token_id)
    }
}

/// Extract contract and token id from a `https://objkt.com/tokens/<contract>/<id>` URL
pub fn parse_objkt_url(url: &str) -> Option<TokenRef> {
    let captures = OBJKT_TOKEN_URL.captures(url)?;
    Some(TokenRef {
        contract: captures.get(1)?.as_str().to_string(),
        token_id: captures.get(2)?.as_str().to_string(),
    })
}

/// Rewrite `ipfs://` URIs to the public HTTP gateway; empty input yields `None`
pub fn to_ipfs_gateway(uri: &str) -> Option<String> {
    if uri.is_empty() {
        return None;
    }
    match uri.strip_prefix(IPFS_SCHEME) {
        Some(path) => Some(format!("{}{}", IPFS_GATEWAY, path)),
        None => Some(uri.to_string()),
    }
}

/// NFT lookup configuration
#[derive(Debug, Clone)]
pub struct NftConfig {
    /// Lookup provider (objkt, mock)
    pub provider: String,
    /// Override for the GraphQL endpoint
    pub endpoint: Option<String>,
}

impl NftConfig {
    pub fn from_env() -> Result<Self, NftError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            provider: std::env::var("NFT_PROVIDER").unwrap_or_else(|_| "objkt".to_string()),
            endpoint: std::env::var("OBJKT_GRAPHQL_URL").ok(),
        })
    }
}

/// NFT metadata lookup trait for different implementations
#[async_trait::async_trait]
pub trait NftLookup: Send + Sync {
    /// Fetch a token's metadata as an artwork draft
    async fn fetch_token(&self, token: &TokenRef) -> Result<ArtworkDraft, NftError>;

    /// Get service name for logging
    fn service_name(&self) -> &'static str;
}

/// Resolve a marketplace URL to an artwork draft, or `None` on any failure
pub async fn lookup_artwork(service: &dyn NftLookup, url: &str) -> Option<ArtworkDraft> {
    let Some(token) = parse_objkt_url(url) else {
        tracing::debug!(url = %url, "Not a marketplace token URL");
        return None;
    };

    match service.fetch_token(&token).await {
        Ok(draft) => Some(draft),
        Err(e) => {
            tracing::warn!(token = %token, error = %e, "NFT metadata lookup failed");
            None
        }
    }
}

/// NFT lookup factory
pub struct NftServiceFactory;

impl NftServiceFactory {
    pub fn create(config: NftConfig) -> Result<Box<dyn NftLookup>, NftError> {
        match config.provider.as_str() {
            "objkt" => {
                tracing::info!("Creating objkt NFT lookup service");
                Ok(Box::new(objkt::ObjktService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock NFT lookup service");
                Ok(Box::new(mock::MockNftService::new()))
            }
            provider => Err(NftError::Configuration(format!(
                "Unknown NFT provider: {}. Supported providers: objkt, mock",
                provider
            ))),
        }
    }
}
