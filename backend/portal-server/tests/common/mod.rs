#![allow(dead_code)]

//! Test infrastructure for portal-server API tests

use portal_auth::{
    AuthService, DEMO_CLIENT_EMAIL, DEMO_CLIENT_PASSWORD, InMemoryCredentialStore,
    LoginRateLimiter, ManualClock, RateLimitConfig,
};
use portal_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"portal-server-integration-test-secret-0123";
pub const MULTIPART_BOUNDARY: &str = "portal-test-boundary";

/// Fixed starting instant for every test clock
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
}

/// Create AppState over the demo account with a manual clock
pub fn create_test_app_state() -> (AppState, Arc<ManualClock>) {
    create_test_app_state_with_limit(RateLimitConfig::default())
}

pub fn create_test_app_state_with_limit(limit: RateLimitConfig) -> (AppState, Arc<ManualClock>) {
    let store = InMemoryCredentialStore::seeded().expect("Failed to seed credential store");
    let clock = Arc::new(ManualClock::new(start_time()));
    let auth = AuthService::with_hs256(TEST_SECRET, Arc::new(store));

    let state = AppState::new(
        Arc::new(auth),
        clock.clone(),
        Arc::new(LoginRateLimiter::new(limit)),
    );
    (state, clock)
}

/// Router with any-origin CORS
pub fn create_test_router(state: AppState) -> Router {
    build_router(state, &[])
}

pub fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::json!({ "email": email, "password": password }).to_string(),
        ))
        .unwrap()
}

/// Log the demo client in and return the access token
pub async fn login_demo_client(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(login_request(DEMO_CLIENT_EMAIL, DEMO_CLIENT_PASSWORD))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

pub fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Multipart body with a single field
pub fn multipart_body(field: &str, filename: &str, contents: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n{contents}\r\n--{b}--\r\n",
        b = MULTIPART_BOUNDARY,
    )
}

pub fn upload_request(token: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/portal/documents/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        );
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
