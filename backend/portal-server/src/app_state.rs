use portal_auth::{AuthService, Clock, LoginRateLimiter};

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub clock: Arc<dyn Clock>,
    pub login_limiter: Arc<LoginRateLimiter>,
}

impl AppState {
    pub fn new(
        auth: Arc<AuthService>,
        clock: Arc<dyn Clock>,
        login_limiter: Arc<LoginRateLimiter>,
    ) -> Self {
        Self {
            auth,
            clock,
            login_limiter,
        }
    }
}
