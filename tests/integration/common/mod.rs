//! Common test utilities and fixtures for integration tests
//!
//! Every test gets its own in-memory store and mock services, wired
//! through the same router the server uses.

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use folio_app::{build_router, AppServices};
use folio_auth::SESSION_COOKIE;
use folio_email::mock::MockEmailService;
use folio_nft::mock::MockNftService;
use folio_store::{ContentStore, MemoryBackend};
use serde_json::Value;
use tower::ServiceExt;

pub const DEFAULT_PASSWORD: &str = "admin123";
pub const NEW_PASSWORD: &str = "gallery-2024";

/// Response captured from a oneshot request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Test application with handles on every mocked dependency
pub struct TestApp {
    pub router: Router,
    pub backend: MemoryBackend,
    pub email: MockEmailService,
    pub nft: MockNftService,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_email(MockEmailService::new())
    }

    pub fn with_email(email: MockEmailService) -> Self {
        let backend = MemoryBackend::new();
        let nft = MockNftService::new();
        let store = ContentStore::new(Arc::new(backend.clone()), DEFAULT_PASSWORD);

        let router = build_router(AppServices {
            store,
            email: Arc::new(email.clone()),
            nft: Arc::new(nft.clone()),
        });

        Self {
            router,
            backend,
            email,
            nft,
        }
    }

    /// Send a request; `authenticated` attaches the session cookie
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if authenticated {
            builder = builder.header(header::COOKIE, format!("{}=true", SESSION_COOKIE));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse> {
        self.request(Method::GET, uri, None, false).await
    }

    pub async fn admin(&self, method: Method, uri: &str, body: Option<Value>) -> Result<TestResponse> {
        self.request(method, uri, body, true).await
    }

    /// Move off the default password so admin sessions become valid
    pub async fn complete_first_login(&self) -> Result<()> {
        let response = self
            .request(
                Method::POST,
                "/api/auth/change-password",
                Some(serde_json::json!({
                    "currentPassword": DEFAULT_PASSWORD,
                    "newPassword": NEW_PASSWORD,
                    "confirmPassword": NEW_PASSWORD,
                })),
                false,
            )
            .await?;
        anyhow::ensure!(
            response.status == StatusCode::OK,
            "change-password failed: {:?}",
            response.body
        );
        Ok(())
    }
}
