#![allow(dead_code)]

//! Test infrastructure for cg-server API tests

use cg_auth::{Claims, JwtValidator};
use cg_config::ApiConfig;
use cg_server::AppState;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const APPLICATIE_A: &str = "6f1d3c1e-8a43-4d55-9d3b-2f0e9b1c7a10";
pub const APPLICATIE_B: &str = "0b7e4f62-51c9-4e0a-a3d2-9c8f1e6b2d44";
pub const RSIN_A: &str = "123456789";
pub const RSIN_B: &str = "987654321";
pub const JWT_SECRET: &str = "test-secret-key-at-least-32-bytes";

/// AppState backed by an in-memory database, auth disabled
pub async fn create_test_app_state() -> AppState {
    let pool = cg_db::create_in_memory_pool()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, None, ApiConfig::default())
}

/// AppState on a WAL database file under `dir`, with a multi-connection pool
pub async fn create_file_backed_app_state(dir: &Path) -> AppState {
    let pool = cg_db::create_pool(&dir.join("issues.db"))
        .await
        .expect("Failed to create test database file");

    AppState::new(pool, None, ApiConfig::default())
}

/// AppState that requires HS256 bearer tokens signed with [`JWT_SECRET`]
pub async fn create_test_app_state_with_auth() -> AppState {
    let pool = cg_db::create_in_memory_pool()
        .await
        .expect("Failed to create test database");
    let validator = JwtValidator::with_hs256(JWT_SECRET.as_bytes());

    AppState::new(pool, Some(Arc::new(validator)), ApiConfig::default())
}

pub fn create_test_token(sub: &str, organisatie: &str, expires_in_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        organisatie: organisatie.to_string(),
        naam: Some("Zaaksysteem".to_string()),
        exp: now + expires_in_secs,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// A body that passes validation
pub fn valid_issue_body() -> Value {
    json!({
        "type": "aanvraag",
        "naam": "Gratis trouwen",
        "beschrijving": "Ik wil graag gratis trouwen.",
        "voornamen": "Jan",
        "geslachtsnaam": "Jansen",
        "email": "jan@example.com",
        "taal": "nl",
    })
}

/// Send one request as `applicatie` acting for `rsin` and return the
/// status with the decoded JSON body (Null when the body is empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    applicatie: &str,
    rsin: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Applicatie-Id", applicatie)
        .header("X-Applicatie-Naam", "Testapplicatie")
        .header("X-Bron-Organisatie", rsin);

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    read_response(response).await
}

pub async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Create an issue and return its id
pub async fn create_issue(app: &Router, applicatie: &str, rsin: &str, body: Value) -> i64 {
    let (status, json) = send(app, "POST", "/issues", applicatie, rsin, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
    json["id"].as_i64().unwrap()
}
