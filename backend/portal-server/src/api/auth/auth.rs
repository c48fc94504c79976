//! Login handler

use crate::{ApiError, ApiResult, AppState, LoginRequest};

use portal_auth::{AccessToken, MAX_SUBJECT_LENGTH};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;

/// POST /auth/login
///
/// Exchange email and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AccessToken>> {
    if !request.has_plausible_email() {
        return Err(ApiError::validation(
            format!(
                "email must look like name@domain and be at most {} characters",
                MAX_SUBJECT_LENGTH
            ),
            Some("email"),
        ));
    }

    state.login_limiter.check(&request.email)?;

    let now = state.clock.now();
    let auth = state.auth.clone();

    // Argon2 verification is CPU-bound
    let token = tokio::task::spawn_blocking(move || {
        auth.login(&request.email, &request.password, now)
    })
    .await
    .map_err(|e| ApiError::Internal {
        message: format!("Login task failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })??;

    info!("Issued access token (expires {})", token.expires_at.to_rfc3339());
    Ok(Json(token))
}
