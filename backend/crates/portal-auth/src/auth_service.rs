use crate::{
    AuthError, Claims, CredentialStore, Result as AuthErrorResult, User, verify_against_dummy,
    verify_password,
};

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use log::debug;
use serde::Serialize;

/// Token lifetime when none is configured
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Issued credential as returned to a client after login
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
    #[serde(skip)]
    pub expires_at: DateTime<Utc>,
}

/// Verifies passwords, issues HS256 tokens and resolves them back to users.
///
/// Sessions are stateless: there is no revocation list, so a leaked token
/// stays valid until its `exp`. Callers needing revocation must keep the TTL
/// short or add a deny-list in front of `resolve_identity`.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    leeway_secs: u64,
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    /// Create a service signing with HS256 over `secret`
    pub fn with_hs256(secret: &[u8], store: Arc<dyn CredentialStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied `now`, not the wall clock
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            leeway_secs: 0,
            store,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Clock-skew tolerance applied to `exp`
    pub fn with_leeway_secs(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Check a plaintext password against the credential store
    #[track_caller]
    pub fn verify_credentials(&self, email: &str, password: &str) -> AuthErrorResult<User> {
        let invalid = || AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        };

        let Some(user) = self.store.lookup(email) else {
            verify_against_dummy(password);
            return Err(invalid());
        };

        if !verify_password(password, &user.password_hash) || !user.active {
            return Err(invalid());
        }

        Ok(user)
    }

    /// Sign a token for `subject` valid from `now` until `now + ttl`
    #[track_caller]
    pub fn issue_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        let claims = Claims::new(subject, now, Self::expiry(now, ttl)?);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Issued token for {} (exp {})", claims.sub, claims.exp);
        Ok(token)
    }

    /// Verify credentials and issue a token with the configured TTL
    #[track_caller]
    pub fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AuthErrorResult<AccessToken> {
        let user = self.verify_credentials(email, password)?;
        let expires_at = Self::expiry(now, self.token_ttl)?;
        let access_token = self.issue_token(&user.email, now, self.token_ttl)?;

        Ok(AccessToken {
            access_token,
            token_type: TOKEN_TYPE_BEARER,
            expires_at,
        })
    }

    #[track_caller]
    fn expiry(now: DateTime<Utc>, ttl: Duration) -> AuthErrorResult<DateTime<Utc>> {
        now.checked_add_signed(ttl)
            .ok_or_else(|| AuthError::TokenLifetime {
                message: format!("{} + {} overflows", now.to_rfc3339(), ttl),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Verify signature, then expiry, then subject
    #[track_caller]
    pub fn decode_and_validate(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<serde_json::Value>(token, &self.decoding_key, &self.validation).map_err(
                |e| match e.kind() {
                    ErrorKind::MissingRequiredClaim(claim) => AuthError::MalformedClaims {
                        claim: claim.clone(),
                        message: "required claim is missing".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::InvalidSignature {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                },
            )?;

        let claims: Claims =
            serde_json::from_value(token_data.claims).map_err(|e| AuthError::MalformedClaims {
                claim: "claims".to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if claims.is_expired_at(now, self.leeway_secs) {
            return Err(AuthError::Expired {
                expired_at: claims.exp,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims)
    }

    /// Resolve a token to the active user it names
    #[track_caller]
    pub fn resolve_identity(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<User> {
        let claims = self.decode_and_validate(token, now)?;

        match self.store.lookup(&claims.sub) {
            Some(user) if user.active => Ok(user),
            _ => Err(AuthError::UnknownSubject {
                subject: claims.sub,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Algorithm name (for logging/debugging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
