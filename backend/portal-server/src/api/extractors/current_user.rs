//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use portal_auth::{AuthFailureKind, User, bearer_token};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The authenticated caller of a protected route
///
/// Reads `Authorization: Bearer <token>` and resolves it to an active user
/// at the state clock's current time. Any failure rejects with a 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(
                    value
                        .to_str()
                        .map_err(|_| ApiError::unauthorized(AuthFailureKind::InvalidScheme))?,
                ),
                None => None,
            };

            let token = bearer_token(header)?;
            let user = state.auth.resolve_identity(token, state.clock.now())?;

            log::debug!("Authenticated request for {}", user.email);
            Ok(CurrentUser(user))
        }
    }
}
