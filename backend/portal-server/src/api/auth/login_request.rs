use portal_auth::MAX_SUBJECT_LENGTH;

use serde::Deserialize;

/// Body of POST /auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Shape check only: `local@domain` with both parts non-empty, no longer
    /// than a token subject may be
    pub fn has_plausible_email(&self) -> bool {
        if self.email.len() > MAX_SUBJECT_LENGTH {
            return false;
        }

        match self.email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        }
    }
}
