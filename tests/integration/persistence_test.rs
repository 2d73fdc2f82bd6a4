//! File-backed persistence integration tests
//!
//! Drives the composed router over a content file in a temp directory and
//! checks that state survives a restart.

mod common;

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use folio_app::{build_router, AppServices};
use folio_email::mock::MockEmailService;
use folio_nft::mock::MockNftService;
use folio_store::{ContentStore, FileBackend};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{DEFAULT_PASSWORD, NEW_PASSWORD};

/// Router over `<dir>/content.json`, as a fresh process would build it
async fn file_router(dir: &Path) -> Router {
    let backend = FileBackend::new(dir.join("data").join("content.json"));
    backend.ensure_dir().await.unwrap();
    build_router(AppServices {
        store: ContentStore::new(Arc::new(backend), DEFAULT_PASSWORD),
        email: Arc::new(MockEmailService::new()),
        nft: Arc::new(MockNftService::new()),
    })
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    authenticated: bool,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if authenticated {
        builder = builder.header(header::COOKIE, "isAuthenticated=true");
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[test_log::test(tokio::test)]
async fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let content_file = dir.path().join("data").join("content.json");

    let first = file_router(dir.path()).await;
    let (status, body) = send(&first, Method::GET, "/api/content", None, false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passwordChanged"], false);
    assert!(content_file.exists());

    let (status, _) = send(
        &first,
        Method::POST,
        "/api/auth/change-password",
        Some(json!({
            "currentPassword": DEFAULT_PASSWORD,
            "newPassword": NEW_PASSWORD,
            "confirmPassword": NEW_PASSWORD,
        })),
        false,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, created) = send(
        &first,
        Method::POST,
        "/api/artworks",
        Some(json!({
            "title": "Tidal",
            "imageUrl": "/img/tidal.jpg",
            "dimensions": {"width": 1000, "height": 800}
        })),
        true,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // A new router over the same file sees everything
    let second = file_router(dir.path()).await;
    let (_, artworks) = send(&second, Method::GET, "/api/artworks", None, false).await;
    assert_eq!(artworks[0]["id"], created["id"]);
    assert_eq!(artworks[0]["dimensions"], json!({"width": 1000, "height": 800}));

    let (status, outcome) = send(
        &second,
        Method::POST,
        "/api/auth/login",
        Some(json!({"password": NEW_PASSWORD})),
        false,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["isDefault"], false);

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(&content_file).unwrap()).unwrap();
    assert_eq!(on_disk["passwordChanged"], true);
    assert_eq!(on_disk["artworks"][0]["title"], "Tidal");
}

#[tokio::test]
async fn test_hand_edited_file_with_loose_fields_loads() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("content.json"),
        json!({
            "artworks": [{"id": "1", "title": null, "year": 2019, "imageUrl": "/a.png"}],
            "exhibitions": [],
            "about": {},
            "adminPassword": DEFAULT_PASSWORD,
            "password_changed": false
        })
        .to_string(),
    )
    .unwrap();

    let router = file_router(dir.path()).await;
    let (status, artworks) = send(&router, Method::GET, "/api/artworks", None, false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(artworks[0]["year"], "2019");

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/auth/login",
        Some(json!({"password": DEFAULT_PASSWORD})),
        false,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
