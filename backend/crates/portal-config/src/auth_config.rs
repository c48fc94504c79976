use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_MINUTES, DEV_FALLBACK_JWT_SECRET,
    Environment, MAX_LEEWAY_SECS, MAX_TOKEN_TTL_MINUTES, MIN_JWT_SECRET_LENGTH,
    MIN_TOKEN_TTL_MINUTES,
};

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    /// Lifetime of issued access tokens
    pub token_ttl_minutes: u64,
    /// Clock-skew tolerance applied when checking `exp`
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            leeway_secs: 0,
        }
    }
}

/// Resolved signing secret. `Debug` never prints the value.
#[derive(Clone)]
pub struct SigningSecret {
    value: String,
    is_fallback: bool,
}

impl SigningSecret {
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// True when the development fallback literal is in use
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("value", &"<redacted>")
            .field("is_fallback", &self.is_fallback)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self, environment: Environment) -> ConfigErrorResult<()> {
        if self.token_ttl_minutes < MIN_TOKEN_TTL_MINUTES
            || self.token_ttl_minutes > MAX_TOKEN_TTL_MINUTES
        {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_minutes must be {}-{}, got {}",
                MIN_TOKEN_TTL_MINUTES, MAX_TOKEN_TTL_MINUTES, self.token_ttl_minutes
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        match &self.jwt_secret {
            Some(secret) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                if secret == DEV_FALLBACK_JWT_SECRET && !environment.is_development() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret is the development fallback, refusing to start in {}",
                        environment
                    )));
                }
            }
            None if !environment.is_development() => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret is required in {} (set PORTAL_AUTH_JWT_SECRET)",
                    environment
                )));
            }
            None => {}
        }

        Ok(())
    }

    /// Secret to sign with, falling back to the development literal only in development
    pub fn signing_secret(&self, environment: Environment) -> ConfigErrorResult<SigningSecret> {
        self.validate(environment)?;

        Ok(match &self.jwt_secret {
            Some(secret) => SigningSecret {
                value: secret.clone(),
                is_fallback: secret == DEV_FALLBACK_JWT_SECRET,
            },
            None => SigningSecret {
                value: DEV_FALLBACK_JWT_SECRET.to_string(),
                is_fallback: true,
            },
        })
    }

    /// Human-readable description for the startup summary (never includes the secret)
    pub fn secret_source(&self) -> &'static str {
        match &self.jwt_secret {
            Some(secret) if secret == DEV_FALLBACK_JWT_SECRET => "development fallback",
            Some(_) => "configured",
            None => "development fallback",
        }
    }
}
