//! Content endpoint integration tests
//!
//! Covers the whole-document API and the per-section admin operations:
//! - GET/POST /api/content
//! - /api/artworks CRUD and the featured view
//! - /api/exhibitions CRUD and the grouped view
//! - /api/about and /api/theme

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::TestApp;

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

mod test_content_document {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let app = TestApp::new();

        let document = json!({
            "artworks": [{
                "id": "1",
                "title": "Tidal",
                "description": "Ink on paper",
                "imageUrl": "/img/tidal.jpg",
                "year": "2023",
                "medium": "Ink",
                "dimensions": {"width": 30, "height": 40},
                "featured": true
            }],
            "exhibitions": [],
            "about": {"name": "Ada", "biography": "Painter"},
            "adminPassword": "",
            "passwordChanged": false
        });

        let save = app
            .request(Method::POST, "/api/content", Some(document), false)
            .await
            .unwrap();
        assert_eq!(save.status, StatusCode::OK);
        assert_eq!(save.body, json!({"success": true}));

        let loaded = app.get("/api/content").await.unwrap();
        assert_eq!(loaded.body["artworks"][0]["title"], "Tidal");
        assert_eq!(loaded.body["artworks"][0]["dimensions"]["width"], 30);
        assert_eq!(loaded.body["about"]["name"], "Ada");
    }

    #[tokio::test]
    async fn test_empty_password_keeps_stored_credentials() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();
        let before = app.backend.snapshot().unwrap();

        let save = app
            .request(
                Method::POST,
                "/api/content",
                Some(json!({"artworks": [], "exhibitions": [], "adminPassword": ""})),
                false,
            )
            .await
            .unwrap();
        assert_eq!(save.status, StatusCode::OK);

        let after = app.backend.snapshot().unwrap();
        assert_eq!(after.admin_password, before.admin_password);
        assert!(after.password_changed);
    }

    #[tokio::test]
    async fn test_malformed_document_is_rejected() {
        let app = TestApp::new();

        let response = app
            .request(
                Method::POST,
                "/api/content",
                Some(json!({"artworks": "not a list"})),
                false,
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body["error"]["code"].is_string());
        assert_eq!(app.backend.write_count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let app = TestApp::new();
        app.backend.fail_reads(true);

        let response = app.get("/api/content").await.unwrap();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

        // Section views degrade to the default document
        let artworks = app.get("/api/artworks").await.unwrap();
        assert_eq!(artworks.status, StatusCode::OK);
        assert_eq!(artworks.body, json!([]));

        let grouped = app.get("/api/exhibitions/grouped").await.unwrap();
        assert_eq!(grouped.status, StatusCode::OK);
        assert_eq!(grouped.body["current"], json!([]));
    }

    #[tokio::test]
    async fn test_legacy_client_document_is_accepted() {
        let app = TestApp::new();

        // Older clients echo the GET body and add their own flag spelling,
        // with loosely typed artwork fields
        let response = app
            .request(
                Method::POST,
                "/api/content",
                Some(json!({
                    "artworks": [{
                        "id": 1700000000000u64,
                        "title": null,
                        "imageUrl": "https://ipfs.io/ipfs/Qm",
                        "year": 2021,
                        "dimensions": {"width": 1000, "height": 800},
                        "featured": null
                    }],
                    "exhibitions": [],
                    "adminPassword": "",
                    "passwordChanged": false,
                    "password_changed": false
                })),
                false,
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

        let loaded = app.get("/api/content").await.unwrap();
        let artwork = &loaded.body["artworks"][0];
        assert_eq!(artwork["id"], "1700000000000");
        assert_eq!(artwork["title"], "");
        assert_eq!(artwork["year"], "2021");
        assert_eq!(artwork["dimensions"], json!({"width": 1000, "height": 800}));

        // Login still works against the loaded document
        let login = app
            .request(
                Method::POST,
                "/api/auth/login",
                Some(json!({"password": crate::common::DEFAULT_PASSWORD})),
                false,
            )
            .await
            .unwrap();
        assert_eq!(login.status, StatusCode::OK);
    }
}

mod test_artworks {
    use super::*;

    #[tokio::test]
    async fn test_writes_require_session() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let response = app
            .request(
                Method::POST,
                "/api/artworks",
                Some(json!({"title": "Dusk", "imageUrl": "/d.png"})),
                false,
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);

        let delete = app
            .request(Method::DELETE, "/api/artworks/1", None, false)
            .await
            .unwrap();
        assert_eq!(delete.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_artwork_lifecycle() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let created = app
            .admin(
                Method::POST,
                "/api/artworks",
                Some(json!({
                    "title": "Dusk",
                    "imageUrl": "/img/dusk.png",
                    "year": "2024",
                    "medium": "Oil",
                    "dimensions": "50 x 70 cm",
                    "featured": true
                })),
            )
            .await
            .unwrap();
        assert_eq!(created.status, StatusCode::CREATED);
        let id = created.body["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let second = app
            .admin(
                Method::POST,
                "/api/artworks",
                Some(json!({"title": "Dawn", "imageUrl": "/img/dawn.png"})),
            )
            .await
            .unwrap();
        let second_id = second.body["id"].as_str().unwrap().to_string();
        assert_ne!(id, second_id);

        let listed = app.get("/api/artworks").await.unwrap();
        assert_eq!(ids(&listed.body), vec![id.clone(), second_id.clone()]);

        let featured = app.get("/api/artworks/featured").await.unwrap();
        assert_eq!(ids(&featured.body), vec![id.clone()]);

        let updated = app
            .admin(
                Method::PATCH,
                &format!("/api/artworks/{}", id),
                Some(json!({"title": "Dusk II", "featured": false})),
            )
            .await
            .unwrap();
        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.body["title"], "Dusk II");
        assert_eq!(updated.body["medium"], "Oil");

        let fetched = app.get(&format!("/api/artworks/{}", id)).await.unwrap();
        assert_eq!(fetched.body["title"], "Dusk II");

        let deleted = app
            .admin(Method::DELETE, &format!("/api/artworks/{}", id), None)
            .await
            .unwrap();
        assert_eq!(deleted.status, StatusCode::NO_CONTENT);

        let listed = app.get("/api/artworks").await.unwrap();
        assert_eq!(ids(&listed.body), vec![second_id]);
    }

    #[tokio::test]
    async fn test_unknown_artwork_is_404_and_unwritten() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();
        let writes = app.backend.write_count();

        let update = app
            .admin(
                Method::PATCH,
                "/api/artworks/missing",
                Some(json!({"title": "Ghost"})),
            )
            .await
            .unwrap();
        assert_eq!(update.status, StatusCode::NOT_FOUND);

        let delete = app
            .admin(Method::DELETE, "/api/artworks/missing", None)
            .await
            .unwrap();
        assert_eq!(delete.status, StatusCode::NOT_FOUND);

        let get = app.get("/api/artworks/missing").await.unwrap();
        assert_eq!(get.status, StatusCode::NOT_FOUND);

        assert_eq!(app.backend.write_count(), writes);
    }

    #[tokio::test]
    async fn test_invalid_artwork_is_400() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let response = app
            .admin(
                Method::POST,
                "/api/artworks",
                Some(json!({"title": "", "imageUrl": "/x.png"})),
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

mod test_exhibitions {
    use super::*;

    async fn create(app: &TestApp, title: &str, start: &str, status: &str) -> String {
        let response = app
            .admin(
                Method::POST,
                "/api/exhibitions",
                Some(json!({
                    "title": title,
                    "location": "Lisbon",
                    "startDate": start,
                    "status": status
                })),
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_grouped_view() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let old = create(&app, "Early Works", "2019-04-01", "past").await;
        let recent = create(&app, "Later Works", "2022-10-01", "past").await;
        let now = create(&app, "Open Studio", "2025-01-15", "current").await;
        let next = create(&app, "Biennale", "2027-06-01", "upcoming").await;

        let grouped = app.get("/api/exhibitions/grouped").await.unwrap();
        assert_eq!(grouped.status, StatusCode::OK);
        assert_eq!(ids(&grouped.body["past"]), vec![recent, old]);
        assert_eq!(ids(&grouped.body["current"]), vec![now]);
        assert_eq!(ids(&grouped.body["upcoming"]), vec![next]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();
        let id = create(&app, "Open Studio", "2025-01-15", "current").await;

        let updated = app
            .admin(
                Method::PATCH,
                &format!("/api/exhibitions/{}", id),
                Some(json!({"status": "past"})),
            )
            .await
            .unwrap();
        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.body["status"], "past");
        assert_eq!(updated.body["title"], "Open Studio");

        let deleted = app
            .admin(Method::DELETE, &format!("/api/exhibitions/{}", id), None)
            .await
            .unwrap();
        assert_eq!(deleted.status, StatusCode::NO_CONTENT);

        let listed = app.get("/api/exhibitions").await.unwrap();
        assert_eq!(listed.body, json!([]));
    }

    #[tokio::test]
    async fn test_invalid_start_date_is_400() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let response = app
            .admin(
                Method::POST,
                "/api/exhibitions",
                Some(json!({"title": "Show", "location": "Porto", "startDate": "soon"})),
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

mod test_pages {
    use super::*;

    #[tokio::test]
    async fn test_about_patch_merges() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let first = app
            .admin(
                Method::PATCH,
                "/api/about",
                Some(json!({"name": "Ada", "location": "Lisbon"})),
            )
            .await
            .unwrap();
        assert_eq!(first.status, StatusCode::OK);

        let second = app
            .admin(Method::PATCH, "/api/about", Some(json!({"biography": "Painter"})))
            .await
            .unwrap();
        assert_eq!(second.body["name"], "Ada");
        assert_eq!(second.body["biography"], "Painter");

        let about = app.get("/api/about").await.unwrap();
        assert_eq!(about.body["location"], "Lisbon");
    }

    #[tokio::test]
    async fn test_about_rejects_bad_email() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let response = app
            .admin(Method::PATCH, "/api/about", Some(json!({"email": "nope"})))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_theme_update_and_reset() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let default = app.get("/api/theme").await.unwrap();
        assert_eq!(default.body["isDark"], true);
        assert_eq!(default.body["colors"]["primary"], "#6366f1");

        let updated = app
            .admin(
                Method::PUT,
                "/api/theme",
                Some(json!({"isDark": false, "colors": {"accent": "#ff0000"}})),
            )
            .await
            .unwrap();
        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.body["isDark"], false);
        assert_eq!(updated.body["colors"]["accent"], "#ff0000");
        assert_eq!(updated.body["colors"]["primary"], "#6366f1");

        let bad = app
            .admin(
                Method::PUT,
                "/api/theme",
                Some(json!({"colors": {"primary": "red"}})),
            )
            .await
            .unwrap();
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);

        let reset = app
            .admin(Method::POST, "/api/theme/reset-colors", None)
            .await
            .unwrap();
        assert_eq!(reset.status, StatusCode::OK);
        assert_eq!(reset.body["isDark"], false);
        assert_eq!(reset.body["colors"]["accent"], "#f59e0b");
    }
}
