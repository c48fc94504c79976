use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_SCHEME: &str = "bearer";

/// Pull the token out of an `Authorization` header value.
///
/// Accepts `Bearer <token>`: case-insensitive scheme, exactly one space, and
/// a non-empty token with no whitespace.
#[track_caller]
pub fn bearer_token(header_value: Option<&str>) -> AuthErrorResult<&str> {
    let value = header_value.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let invalid_scheme = || AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    };

    let (scheme, token) = value.trim().split_once(' ').ok_or_else(invalid_scheme)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME)
        || token.is_empty()
        || token.contains(char::is_whitespace)
    {
        return Err(invalid_scheme());
    }

    Ok(token)
}
