/// Configuration for login rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum login attempts per email per window
    pub max_attempts: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,  // 5 attempts
            window_secs: 900, // per 15 minutes
        }
    }
}
