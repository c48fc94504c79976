//! Startup wiring from validated configuration to application state

use crate::AppState;
use crate::error::{Result as ServerErrorResult, ServerError};

use portal_auth::{AuthService, Clock, CredentialStore, LoginRateLimiter, RateLimitConfig};
use portal_config::Config;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use log::{info, warn};

/// Resolve the log file path under the config directory, creating the log
/// directory when file logging is configured. `None` means stdout.
pub fn log_file_path(config: &Config) -> ServerErrorResult<Option<PathBuf>> {
    let Some(filename) = &config.logging.file else {
        return Ok(None);
    };

    let log_dir = Config::config_dir()?.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::LogDirectory {
        path: log_dir.display().to_string(),
        source: e,
    })?;

    Ok(Some(log_dir.join(filename)))
}

/// Build the shared handler state from config and injected capabilities
pub fn build_state(
    config: &Config,
    store: Arc<dyn CredentialStore>,
    clock: Arc<dyn Clock>,
) -> ServerErrorResult<AppState> {
    let secret = config.auth.signing_secret(config.environment)?;
    if secret.is_fallback() {
        warn!("**************************************************************");
        warn!("JWT: signing with the built-in DEVELOPMENT secret.");
        warn!("Anyone can forge tokens for this server. Set PORTAL_AUTH_JWT_SECRET.");
        warn!("**************************************************************");
    }

    let token_ttl_minutes = i64::try_from(config.auth.token_ttl_minutes).map_err(|_| {
        portal_config::ConfigError::auth("auth.token_ttl_minutes does not fit a duration")
    })?;

    let auth = AuthService::with_hs256(secret.as_bytes(), store)
        .with_token_ttl(Duration::minutes(token_ttl_minutes))
        .with_leeway_secs(config.auth.leeway_secs);
    info!("JWT: {} authentication enabled", auth.algorithm());

    let login_limiter = LoginRateLimiter::new(RateLimitConfig {
        max_attempts: config.rate_limit.max_attempts,
        window_secs: config.rate_limit.window_secs,
    });

    Ok(AppState::new(
        Arc::new(auth),
        clock,
        Arc::new(login_limiter),
    ))
}
