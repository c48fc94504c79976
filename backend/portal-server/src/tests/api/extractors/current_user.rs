use crate::CurrentUser;
use crate::tests::{TEST_SECRET, create_test_state, start_time};

use portal_auth::{AuthFailureKind, AuthService, InMemoryCredentialStore};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::Duration;

fn token_for(subject: &str) -> String {
    let auth = AuthService::with_hs256(TEST_SECRET, Arc::new(InMemoryCredentialStore::new()));
    auth.issue_token(subject, start_time(), Duration::hours(24))
        .unwrap()
}

async fn extract(authorization: Option<&str>) -> Result<CurrentUser, crate::ApiError> {
    let (state, _clock) = create_test_state();
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    CurrentUser::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let token = token_for("client@test.com");

    let result = extract(Some(&format!("Bearer {}", token))).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.email, "client@test.com");
}

#[tokio::test]
async fn test_extractor_accepts_lowercase_scheme() {
    let token = token_for("client@test.com");

    let result = extract(Some(&format!("bearer {}", token))).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let result = extract(None).await;

    let kind = result.unwrap_err().auth_failure_kind();
    assert_eq!(kind, Some(AuthFailureKind::MissingHeader));
}

#[tokio::test]
async fn test_extractor_rejects_basic_scheme() {
    let result = extract(Some("Basic Y2xpZW50QHRlc3QuY29tOnBhc3N3b3Jk")).await;

    let kind = result.unwrap_err().auth_failure_kind();
    assert_eq!(kind, Some(AuthFailureKind::InvalidScheme));
}

#[tokio::test]
async fn test_extractor_rejects_token_for_unknown_subject() {
    let token = token_for("stranger@test.com");

    let result = extract(Some(&format!("Bearer {}", token))).await;

    let kind = result.unwrap_err().auth_failure_kind();
    assert_eq!(kind, Some(AuthFailureKind::UnknownSubject));
}

#[tokio::test]
async fn test_extractor_rejects_token_for_inactive_subject() {
    let token = token_for("former@test.com");

    let result = extract(Some(&format!("Bearer {}", token))).await;

    let kind = result.unwrap_err().auth_failure_kind();
    assert_eq!(kind, Some(AuthFailureKind::UnknownSubject));
}

#[tokio::test]
async fn test_extractor_uses_state_clock_for_expiry() {
    let (state, clock) = create_test_state();
    let token = token_for("client@test.com");
    clock.advance(Duration::hours(25));

    let (mut parts, _body) = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
        .into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    let kind = result.unwrap_err().auth_failure_kind();
    assert_eq!(kind, Some(AuthFailureKind::Expired));
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let other = AuthService::with_hs256(
        b"a-completely-different-secret-value-here",
        Arc::new(InMemoryCredentialStore::new()),
    );
    let token = other
        .issue_token("client@test.com", start_time(), Duration::hours(24))
        .unwrap();

    let result = extract(Some(&format!("Bearer {}", token))).await;

    let kind = result.unwrap_err().auth_failure_kind();
    assert_eq!(kind, Some(AuthFailureKind::InvalidSignature));
}
