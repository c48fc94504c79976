mod auth_config;
mod config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

pub use auth_config::{AuthConfig, SigningSecret};
pub use config::Config;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:8000"];

// Auth constraints
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_MINUTES: u64 = 60 * 24;
const MIN_TOKEN_TTL_MINUTES: u64 = 1;
const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 30;
const MAX_LEEWAY_SECS: u64 = 300;

/// Local-development signing secret. Rejected outside `Environment::Development`.
pub const DEV_FALLBACK_JWT_SECRET: &str = "local-development-only-secret-change-me-now";

/// Config directory override
pub const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".portal";
const CONFIG_FILE_NAME: &str = "config.toml";
