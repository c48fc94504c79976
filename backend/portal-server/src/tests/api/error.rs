use crate::{ApiError, CREDENTIALS_REJECTED_MESSAGE, LOGIN_FAILED_MESSAGE};

use portal_auth::{AuthError, AuthFailureKind};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthorized_returns_generic_401_with_bearer_challenge() {
    let error = ApiError::unauthorized(AuthFailureKind::Expired);
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    assert_eq!(
        response.extensions().get::<AuthFailureKind>(),
        Some(&AuthFailureKind::Expired)
    );

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], CREDENTIALS_REJECTED_MESSAGE);
}

#[tokio::test]
async fn test_unauthorized_body_is_identical_for_every_kind() {
    let mut bodies = Vec::new();
    for kind in [
        AuthFailureKind::InvalidSignature,
        AuthFailureKind::Expired,
        AuthFailureKind::MalformedClaims,
        AuthFailureKind::UnknownSubject,
        AuthFailureKind::MissingHeader,
        AuthFailureKind::InvalidScheme,
    ] {
        bodies.push(body_json(ApiError::unauthorized(kind).into_response()).await);
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(!bodies[0].to_string().contains("TOKEN_EXPIRED"));
}

#[tokio::test]
async fn test_login_failed_returns_401_with_login_message() {
    let error = ApiError::LoginFailed {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("email must look like name@domain", Some("email"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let response = ApiError::bad_request("Invalid multipart body").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Something went wrong".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_expired_auth_error_converts_to_unauthorized() {
    let auth_err = AuthError::Expired {
        expired_at: 1_700_000_000,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    match api_err {
        ApiError::Unauthorized { kind, .. } => assert_eq!(kind, AuthFailureKind::Expired),
        _ => panic!("Expected Unauthorized error"),
    }
}

#[test]
fn test_invalid_credentials_converts_to_login_failed() {
    let auth_err = AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::LoginFailed { .. }));
}

#[tokio::test]
async fn test_rate_limit_converts_to_429() {
    let auth_err = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 900,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();
    let response = api_err.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response.extensions().get::<AuthFailureKind>(),
        Some(&AuthFailureKind::RateLimited)
    );

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "RATE_LIMIT_EXCEEDED");
}

#[test]
fn test_password_hash_error_converts_to_internal() {
    let auth_err = AuthError::PasswordHash {
        message: "salt generation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    match api_err {
        ApiError::Internal { message, .. } => assert!(!message.contains("salt")),
        _ => panic!("Expected Internal error"),
    }
}
