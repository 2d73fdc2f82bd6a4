//! Contact relay, NFT import and reset integration tests

mod common;

use axum::http::{Method, StatusCode};
use folio_email::mock::MockEmailService;
use folio_nft::TokenRef;
use folio_store::ArtworkDraft;
use serde_json::json;

use crate::common::{TestApp, DEFAULT_PASSWORD};

fn contact_form() -> serde_json::Value {
    json!({
        "name": "Grace",
        "email": "grace@example.com",
        "subject": "Commission",
        "message": "Do you take commissions?"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app.get("/health").await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!("OK"));
}

mod test_contact {
    use super::*;

    #[tokio::test]
    async fn test_message_is_relayed() {
        let app = TestApp::new();

        let status = app.get("/api/contact/status").await.unwrap();
        assert_eq!(status.body, json!({"configured": true}));

        let response = app
            .request(Method::POST, "/api/contact", Some(contact_form()), false)
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"success": true}));

        let sent = app.email.get_all_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message.name, "Grace");
        assert_eq!(sent[0].message.subject, "Commission");
    }

    #[tokio::test]
    async fn test_unconfigured_relay_is_503() {
        let app = TestApp::with_email(MockEmailService::unconfigured());

        let status = app.get("/api/contact/status").await.unwrap();
        assert_eq!(status.body, json!({"configured": false}));

        let response = app
            .request(Method::POST, "/api/contact", Some(contact_form()), false)
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(app.email.email_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_form_is_400() {
        let app = TestApp::new();

        let response = app
            .request(
                Method::POST,
                "/api/contact",
                Some(json!({"name": "Grace", "email": "not-an-email", "message": "Hi"})),
                false,
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(app.email.email_count(), 0);
    }
}

mod test_nft_lookup {
    use super::*;

    #[tokio::test]
    async fn test_known_token_returns_draft() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let token = TokenRef {
            contract: "KT1abc".to_string(),
            token_id: "42".to_string(),
        };
        app.nft.insert(
            token.clone(),
            ArtworkDraft {
                title: "Signal".to_string(),
                image_url: "https://ipfs.io/ipfs/QmArtifact".to_string(),
                medium: "Digital".to_string(),
                nft_link: Some(token.url()),
                ..Default::default()
            },
        );

        let response = app
            .admin(
                Method::GET,
                "/api/nft?url=https://objkt.com/tokens/KT1abc/42",
                None,
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["title"], "Signal");
        assert_eq!(response.body["medium"], "Digital");
        assert_eq!(
            response.body["nftLink"],
            "https://objkt.com/tokens/KT1abc/42"
        );
    }

    #[tokio::test]
    async fn test_unknown_or_bad_url_is_null() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let unknown = app
            .admin(
                Method::GET,
                "/api/nft?url=https://objkt.com/tokens/KT1abc/7",
                None,
            )
            .await
            .unwrap();
        assert_eq!(unknown.status, StatusCode::OK);
        assert!(unknown.body.is_null());

        let bad = app
            .admin(Method::GET, "/api/nft?url=https://example.com/art", None)
            .await
            .unwrap();
        assert_eq!(bad.status, StatusCode::OK);
        assert!(bad.body.is_null());
    }

    #[tokio::test]
    async fn test_lookup_requires_session() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let response = app
            .get("/api/nft?url=https://objkt.com/tokens/KT1abc/42")
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}

mod test_reset {
    use super::*;

    #[tokio::test]
    async fn test_reset_restores_factory_document() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let created = app
            .admin(
                Method::POST,
                "/api/artworks",
                Some(json!({"title": "Dusk", "imageUrl": "/d.png"})),
            )
            .await
            .unwrap();
        assert_eq!(created.status, StatusCode::CREATED);

        let reset = app
            .admin(Method::POST, "/api/admin/reset", None)
            .await
            .unwrap();
        assert_eq!(reset.status, StatusCode::OK);
        assert!(reset.set_cookie().is_some_and(|c| c.contains("Max-Age=0")));

        let content = app.get("/api/content").await.unwrap();
        assert_eq!(content.body["artworks"], json!([]));
        assert_eq!(content.body["passwordChanged"], false);

        // Back to the first-login flow
        let login = app
            .request(
                Method::POST,
                "/api/auth/login",
                Some(json!({"password": DEFAULT_PASSWORD})),
                false,
            )
            .await
            .unwrap();
        assert_eq!(login.body["isDefault"], true);
    }

    #[tokio::test]
    async fn test_reset_requires_session() {
        let app = TestApp::new();
        app.complete_first_login().await.unwrap();

        let response = app
            .request(Method::POST, "/api/admin/reset", None, false)
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(app.backend.snapshot().unwrap().password_changed);
    }
}
