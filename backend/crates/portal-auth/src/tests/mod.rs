
use crate::{AuthService, DEMO_CLIENT_EMAIL, DEMO_CLIENT_PASSWORD, InMemoryCredentialStore};

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const INACTIVE_EMAIL: &str = "former@test.com";

/// Fixed instant so expiry arithmetic in tests is exact
pub(crate) fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
}

pub(crate) fn seeded_store() -> InMemoryCredentialStore {
    InMemoryCredentialStore::new()
        .with_user(DEMO_CLIENT_EMAIL, DEMO_CLIENT_PASSWORD)
        .unwrap()
        .with_inactive_user(INACTIVE_EMAIL, "password")
        .unwrap()
}

pub(crate) fn test_service() -> AuthService {
    AuthService::with_hs256(TEST_SECRET, Arc::new(seeded_store()))
}
