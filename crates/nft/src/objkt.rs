//! objkt.com Metadata Implementation
//!
//! Queries the objkt GraphQL API (https://data.objkt.com/v3/graphql) for a
//! single token and maps it onto an artwork draft.

use chrono::{DateTime, Datelike};
use folio_store::{ArtworkDraft, Dimensions};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{to_ipfs_gateway, NftConfig, NftError, NftLookup, TokenRef, NFT_MEDIUM};

const DEFAULT_ENDPOINT: &str = "https://data.objkt.com/v3/graphql";

const TOKEN_QUERY: &str = r#"
query TokenMetadata($contract: String!, $tokenId: String!) {
  fa(where: {contract: {_eq: $contract}}) {
    tokens(where: {token_id: {_eq: $tokenId}}) {
      name
      description
      artifact_uri
      display_uri
      dimensions
      timestamp
    }
  }
}
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    contract: &'a str,
    #[serde(rename = "tokenId")]
    token_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<TokenData>,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    #[serde(default)]
    fa: Vec<Collection>,
}

#[derive(Debug, Deserialize)]
struct Collection {
    #[serde(default)]
    tokens: Vec<Token>,
}

#[derive(Debug, Default, Deserialize)]
struct Token {
    name: Option<String>,
    description: Option<String>,
    artifact_uri: Option<String>,
    display_uri: Option<String>,
    dimensions: Option<Value>,
    timestamp: Option<String>,
}

impl Token {
    /// Map onto a draft; a token without an artifact has nothing to show
    fn into_draft(self, token: &TokenRef) -> Option<ArtworkDraft> {
        let image_url = to_ipfs_gateway(self.artifact_uri.as_deref().unwrap_or_default())?;
        let display_url = self
            .display_uri
            .as_deref()
            .and_then(to_ipfs_gateway);

        let year = self
            .timestamp
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.year().to_string())
            .unwrap_or_default();

        let dimensions = self
            .dimensions
            .as_ref()
            .and_then(Dimensions::from_value)
            .unwrap_or_default();

        Some(ArtworkDraft {
            title: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image_url,
            display_url,
            year,
            medium: NFT_MEDIUM.to_string(),
            dimensions,
            nft_link: Some(token.url()),
            featured: false,
        })
    }
}

/// objkt.com lookup service implementation
pub struct ObjktService {
    client: Client,
    endpoint: String,
}

impl ObjktService {
    pub fn new(config: NftConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

fn first_token(response: GraphQlResponse) -> Option<Token> {
    response
        .data?
        .fa
        .into_iter()
        .next()?
        .tokens
        .into_iter()
        .next()
}

#[async_trait::async_trait]
impl NftLookup for ObjktService {
    async fn fetch_token(&self, token: &TokenRef) -> Result<ArtworkDraft, NftError> {
        let body = GraphQlRequest {
            query: TOKEN_QUERY,
            variables: Variables {
                contract: &token.contract,
                token_id: &token.token_id,
            },
        };

        tracing::debug!(token = %token, "Sending objkt GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NftError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NftError::Response(format!("objkt returned {}", status)));
        }

        let parsed: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| NftError::Response(format!("Failed to parse response: {}", e)))?;

        first_token(parsed)
            .and_then(|t| t.into_draft(token))
            .ok_or_else(|| NftError::NotFound(token.to_string()))
    }

    fn service_name(&self) -> &'static str {
        "objkt"
    }
}
