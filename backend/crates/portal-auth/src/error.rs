use error_location::ErrorLocation;
use thiserror::Error;

/// Category of an authentication failure.
///
/// Attached to rejected responses in-process so callers and tests can tell
/// failures apart without that detail ever reaching the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthFailureKind {
    InvalidCredentials,
    InvalidSignature,
    Expired,
    MalformedClaims,
    UnknownSubject,
    MissingHeader,
    InvalidScheme,
    RateLimited,
    Internal,
}

impl AuthFailureKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::Expired => "TOKEN_EXPIRED",
            Self::MalformedClaims => "MALFORMED_CLAIMS",
            Self::UnknownSubject => "UNKNOWN_SUBJECT",
            Self::MissingHeader => "MISSING_AUTH_HEADER",
            Self::InvalidScheme => "INVALID_AUTH_SCHEME",
            Self::RateLimited => "RATE_LIMIT_EXCEEDED",
            Self::Internal => "AUTH_INTERNAL",
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email and wrong password deliberately share this variant.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid token signature or encoding: {message} {location}")]
    InvalidSignature {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired at {expired_at} {location}")]
    Expired {
        expired_at: i64,
        location: ErrorLocation,
    },

    #[error("Malformed claim '{claim}': {message} {location}")]
    MalformedClaims {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token subject '{subject}' does not resolve to an active user {location}")]
    UnknownSubject {
        subject: String,
        location: ErrorLocation,
    },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token lifetime out of range: {message} {location}")]
    TokenLifetime {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn kind(&self) -> AuthFailureKind {
        match self {
            Self::InvalidCredentials { .. } => AuthFailureKind::InvalidCredentials,
            Self::InvalidSignature { .. } => AuthFailureKind::InvalidSignature,
            Self::Expired { .. } => AuthFailureKind::Expired,
            Self::MalformedClaims { .. } => AuthFailureKind::MalformedClaims,
            Self::UnknownSubject { .. } => AuthFailureKind::UnknownSubject,
            Self::MissingHeader { .. } => AuthFailureKind::MissingHeader,
            Self::InvalidScheme { .. } => AuthFailureKind::InvalidScheme,
            Self::RateLimitExceeded { .. } => AuthFailureKind::RateLimited,
            Self::TokenEncode { .. } | Self::TokenLifetime { .. } | Self::PasswordHash { .. } => {
                AuthFailureKind::Internal
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        self.kind().code()
    }

    /// Claim name for claim-level failures
    pub fn field(&self) -> Option<String> {
        match self {
            Self::MalformedClaims { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
