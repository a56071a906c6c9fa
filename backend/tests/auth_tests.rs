//! Authentication tests against a stubbed identity provider
//!
//! The provider owns the account lifecycle; these tests pin down what the
//! service adds around it: session creation, token plumbing, and cleanup.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::{WeatherReading, CREDIT_CAP};
use stylist_backend::error::AppError;
use stylist_backend::external::SupabaseAuthClient;
use stylist_backend::services::session::SessionStore;
use stylist_backend::services::AuthService;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn provider_session_body() -> serde_json::Value {
    serde_json::json!({
        "access_token": "provider-token",
        "user": {
            "id": "user-1",
            "email": "user@example.com",
            "created_at": "2025-05-01T10:00:00Z"
        }
    })
}

fn service_for(server: &MockServer, sessions: Arc<SessionStore>) -> AuthService {
    let client = SupabaseAuthClient::new(server.uri(), "service-key".to_string());
    AuthService::new(client, sessions)
}

#[tokio::test]
async fn login_opens_a_session_with_a_full_allowance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "service-key"))
        .and(body_string_contains("user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_session_body()))
        .mount(&server)
        .await;

    let sessions = Arc::new(SessionStore::new());
    let service = service_for(&server, sessions.clone());

    let (token, identity) = service
        .login("user@example.com", "hunter42", t0())
        .await
        .unwrap();

    assert_eq!(identity.email, "user@example.com");
    assert_eq!(identity.user_id, "user-1");
    assert!(identity.registered_at.is_some());

    let session = sessions.snapshot(&token).unwrap();
    assert_eq!(session.credits.balance(), CREDIT_CAP);
    assert!(session.last_reading.is_none());
}

#[tokio::test]
async fn signup_also_opens_a_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_session_body()))
        .mount(&server)
        .await;

    let sessions = Arc::new(SessionStore::new());
    let service = service_for(&server, sessions.clone());

    let (token, _) = service
        .signup("user@example.com", "hunter42", t0())
        .await
        .unwrap();
    assert!(sessions.snapshot(&token).is_some());
}

#[tokio::test]
async fn rejected_login_surfaces_the_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let sessions = Arc::new(SessionStore::new());
    let service = service_for(&server, sessions.clone());

    let err = service
        .login("user@example.com", "wrong", t0())
        .await
        .unwrap_err();
    match err {
        AppError::Gateway(gateway) => {
            assert!(gateway.0.contains("Invalid login credentials"));
        }
        other => panic!("expected a gateway error, got {:?}", other),
    }
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn logout_clears_the_session_and_its_cached_reading() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_session_body()))
        .mount(&server)
        .await;

    let sessions = Arc::new(SessionStore::new());
    let service = service_for(&server, sessions.clone());
    let (token, _) = service
        .login("user@example.com", "hunter42", t0())
        .await
        .unwrap();

    sessions.with_session(&token, |session| {
        session.last_reading = Some(WeatherReading {
            city: "London".to_string(),
            temperature_c: 18.5,
            feels_like_c: 17.2,
            condition: "light rain".to_string(),
            humidity_pct: 72,
            wind_speed_mps: 4.1,
        });
    });

    service.logout(token).unwrap();
    assert!(sessions.snapshot(&token).is_none());

    // A second logout on the same token is refused
    assert!(matches!(
        service.logout(token),
        Err(AppError::Unauthorized)
    ));
}

#[tokio::test]
async fn password_change_uses_the_user_scoped_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_session_body()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer provider-token"))
        .and(body_string_contains("s3cret-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = Arc::new(SessionStore::new());
    let service = service_for(&server, sessions.clone());
    let (token, _) = service
        .login("user@example.com", "hunter42", t0())
        .await
        .unwrap();

    service.change_password(token, "s3cret-new").await.unwrap();
}

#[tokio::test]
async fn account_deletion_hits_the_admin_endpoint_and_drops_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_session_body()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/auth/v1/admin/users/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = Arc::new(SessionStore::new());
    let service = service_for(&server, sessions.clone());
    let (token, _) = service
        .login("user@example.com", "hunter42", t0())
        .await
        .unwrap();

    service.delete_account(token).await.unwrap();
    assert!(sessions.snapshot(&token).is_none());
}
