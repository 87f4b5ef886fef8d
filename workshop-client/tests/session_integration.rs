// workshop-client/tests/session_integration.rs
// Auth session against a mock backend

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workshop_client::session::{LOGIN_FAILED, RESET_LINK_SENT};
use workshop_client::{AuthSession, FileTokenStore, MemoryTokenStore, Role, StoredToken, TokenStore};

#[tokio::test]
async fn test_login_persists_token_and_loads_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(body_json(json!({ "email": "rina@bengkel.id", "password": "Rahasia123" })))
        .respond_with(common::ok(json!({ "token": "tok-123" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(common::ok(common::user("cashier")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path());
    let mut session = AuthSession::new(common::api(&server), store.clone());

    let user = session.login("rina@bengkel.id", "Rahasia123").await.unwrap();
    assert_eq!(user.role, Role::Cashier);
    assert!(session.is_authenticated());
    assert_eq!(session.api().token(), Some("tok-123"));

    let stored = store.load().unwrap().unwrap();
    assert_eq!(stored.token, "tok-123");
    assert_eq!(stored.email.as_deref(), Some("rina@bengkel.id"));
}

#[tokio::test]
async fn test_bad_credentials_suggest_password_reset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(common::failure(401, json!({ "status": false, "error": "Invalid Credentials" })))
        .mount(&server)
        .await;

    let mut session = AuthSession::new(common::api(&server), MemoryTokenStore::new());
    let err = session.login("rina@bengkel.id", "wrongpass").await.unwrap_err();

    assert_eq!(err.message, "Invalid Credentials");
    assert!(session.suggest_password_reset());
    assert!(!session.is_authenticated());
    assert!(session.store().load().unwrap().is_none());
}

#[tokio::test]
async fn test_login_transport_failure_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let mut session = AuthSession::new(common::api(&server), MemoryTokenStore::new());
    let err = session.login("rina@bengkel.id", "Rahasia123").await.unwrap_err();
    assert_eq!(err.message, LOGIN_FAILED);
    assert!(!session.suggest_password_reset());
}

#[tokio::test]
async fn test_restore_with_valid_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer saved"))
        .respond_with(common::ok(common::user("mechanic")))
        .mount(&server)
        .await;

    let mut session = AuthSession::new(common::api(&server), MemoryTokenStore::with_token("saved"));
    assert!(session.restore().await);
    assert_eq!(session.role(), Some(Role::Mechanic));
}

#[tokio::test]
async fn test_restore_with_rejected_token_signs_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(common::failure(401, json!({ "message": "token expired" })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path());
    store.save(&StoredToken::new("expired", None)).unwrap();

    let mut session = AuthSession::new(common::api(&server), store.clone());
    assert!(!session.restore().await);
    assert!(!session.is_authenticated());
    assert!(session.api().token().is_none());
    assert!(!store.exists());
}

#[tokio::test]
async fn test_restore_without_token_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(common::ok(common::user("admin")))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = AuthSession::new(common::api(&server), MemoryTokenStore::new());
    assert!(!session.restore().await);
}

#[tokio::test]
async fn test_logout_clears_local_state_even_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(common::ok(common::user("customer")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/user/logout"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = AuthSession::new(common::api(&server), MemoryTokenStore::with_token("live"));
    assert!(session.restore().await);

    session.logout().await;
    assert!(!session.is_authenticated());
    assert!(session.api().token().is_none());
    assert!(session.store().load().unwrap().is_none());
}

#[tokio::test]
async fn test_update_profile_replaces_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(common::ok(common::user("customer")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/user"))
        .and(body_json(json!({ "name": "Rina W.", "email": "rina@bengkel.id", "phone": "0812" })))
        .respond_with(common::ok(json!({
            "id": "customer-1", "name": "Rina W.", "email": "rina@bengkel.id",
            "phone": "0812", "role": "customer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = AuthSession::new(common::api(&server), MemoryTokenStore::with_token("live"));
    session.restore().await;

    let update = shared::client::ProfileUpdate {
        name: "Rina W.".into(),
        email: "rina@bengkel.id".into(),
        phone: "0812".into(),
        password: None,
    };
    let user = session.update_profile(&update).await.unwrap();
    assert_eq!(user.name, "Rina W.");
}

#[tokio::test]
async fn test_forgot_password_is_neutral() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/forgot-password"))
        .and(body_json(json!({ "email": "nobody@example.com" })))
        .respond_with(common::ok(json!(null)))
        .mount(&server)
        .await;

    let session = AuthSession::new(common::api(&server), MemoryTokenStore::new());
    assert_eq!(session.forgot_password("nobody@example.com").await.unwrap(), RESET_LINK_SENT);
}

#[test]
fn test_corrupt_token_file_reads_as_signed_out() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();
    assert!(store.load().unwrap().is_none());

    store.save(&StoredToken::new("fresh", None)).unwrap();
    assert_eq!(store.load().unwrap().unwrap().token, "fresh");
    store.clear().unwrap();
    assert!(!store.exists());
}
