//! Mock NFT lookup for tests and offline development

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use folio_store::ArtworkDraft;

use crate::{NftError, NftLookup, TokenRef};

/// Lookup service answering from a fixed set of tokens
#[derive(Debug, Clone, Default)]
pub struct MockNftService {
    tokens: Arc<Mutex<HashMap<TokenRef, ArtworkDraft>>>,
}

impl MockNftService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the draft returned for `token`
    pub fn insert(&self, token: TokenRef, draft: ArtworkDraft) {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.insert(token, draft);
        }
    }
}

#[async_trait::async_trait]
impl NftLookup for MockNftService {
    async fn fetch_token(&self, token: &TokenRef) -> Result<ArtworkDraft, NftError> {
        self.tokens
            .lock()
            .map_err(|_| NftError::Request("mock registry poisoned".to_string()))?
            .get(token)
            .cloned()
            .ok_or_else(|| NftError::NotFound(token.to_string()))
    }

    fn service_name(&self) -> &'static str {
        "mock"
    }
}
