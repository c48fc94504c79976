pub mod auth_service;
pub mod bearer;
pub mod claims;
pub mod clock;
pub mod credential_store;
pub mod error;
pub mod login_rate_limiter;
pub mod password;
pub mod rate_limit_config;
pub mod user;

pub use auth_service::{AccessToken, AuthService, DEFAULT_TOKEN_TTL_HOURS, TOKEN_TYPE_BEARER};
pub use bearer::bearer_token;
pub use claims::{Claims, MAX_SUBJECT_LENGTH};
pub use clock::{Clock, ManualClock, SystemClock};
pub use credential_store::{
    CredentialStore, DEMO_CLIENT_EMAIL, DEMO_CLIENT_PASSWORD, InMemoryCredentialStore,
};
pub use error::{AuthError, AuthFailureKind, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_against_dummy, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use user::User;

#[cfg(test)]
mod tests;
