//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Every authentication failure leaves
//! the process as the same generic 401; the specific `AuthFailureKind` rides
//! along as a response extension for in-process observers only.

use portal_auth::{AuthError, AuthFailureKind};

use std::panic::Location;

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const CREDENTIALS_REJECTED_MESSAGE: &str = "Could not validate credentials";
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect email or password";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer token missing, malformed or not resolvable to an active user (401)
    #[error("Unauthorized: {} {location}", .kind.code())]
    Unauthorized {
        kind: AuthFailureKind,
        location: ErrorLocation,
    },

    /// Login rejected; unknown email and wrong password are indistinguishable (401)
    #[error("Login failed {location}")]
    LoginFailed { location: ErrorLocation },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Too many login attempts (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(kind: AuthFailureKind) -> Self {
        ApiError::Unauthorized {
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Failure kind carried by 401 responses
    pub fn auth_failure_kind(&self) -> Option<AuthFailureKind> {
        match self {
            ApiError::Unauthorized { kind, .. } => Some(*kind),
            ApiError::LoginFailed { .. } => Some(AuthFailureKind::InvalidCredentials),
            ApiError::TooManyRequests { .. } => Some(AuthFailureKind::RateLimited),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let kind = self.auth_failure_kind();

        let (status, body) = match self {
            ApiError::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message: CREDENTIALS_REJECTED_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::LoginFailed { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: LOGIN_FAILED_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::TooManyRequests { message, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiErrorBody {
                    code: "RATE_LIMIT_EXCEEDED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        if let Some(kind) = kind {
            response.extensions_mut().insert(kind);
        }

        response
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::InvalidCredentials { .. } => ApiError::LoginFailed { location },
            AuthError::RateLimitExceeded { window_secs, .. } => ApiError::TooManyRequests {
                message: format!(
                    "Too many login attempts, try again in up to {} seconds",
                    window_secs
                ),
                location,
            },
            AuthError::TokenEncode { .. }
            | AuthError::TokenLifetime { .. }
            | AuthError::PasswordHash { .. } => {
                // Don't expose internal details to clients
                log::error!("Auth internal error: {}", e);
                ApiError::Internal {
                    message: "Authentication service failure".to_string(),
                    location,
                }
            }
            other => {
                log::debug!("Rejected credentials: {}", other);
                ApiError::Unauthorized {
                    kind: other.kind(),
                    location,
                }
            }
        }
    }
}

/// Convert multipart parse errors to API errors
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::bad_request(format!("Invalid multipart body: {}", e.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
